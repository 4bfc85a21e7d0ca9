//! Cart Data Structures
//!
//! A cart is the set of lines stored for one `session_id`. Each product
//! appears at most once per session; adding it again raises the quantity.

use serde::{Deserialize, Serialize};

use crate::shared::error::{require_session_id, SharedError};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_ITEM: i32 = 9999;

fn default_quantity() -> i32 {
    1
}

/// Request body for `POST /api/cart/add`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub session_id: String,
    pub product_id: i32,
    /// Units to add (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

impl AddToCartRequest {
    /// Check the request before touching the database
    ///
    /// Returns the trimmed session id.
    pub fn validate(&self) -> Result<&str, SharedError> {
        let session_id = require_session_id(&self.session_id)?;
        if self.product_id <= 0 {
            return Err(SharedError::validation("product_id", "must be positive"));
        }
        if !(1..=MAX_QUANTITY_PER_ITEM).contains(&self.quantity) {
            return Err(SharedError::validation(
                "quantity",
                format!("must be between 1 and {}", MAX_QUANTITY_PER_ITEM),
            ));
        }
        Ok(session_id)
    }
}

/// A single cart line joined with its product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub item_id: i32,
    pub session_id: String,
    pub product_id: i32,
    pub product_name: String,
    pub product_img: String,
    /// Unit price in cents
    pub price_cents: i64,
    pub quantity: i32,
}

impl CartLine {
    /// Price of this line (unit price times quantity)
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents * i64::from(self.quantity)
    }
}

/// Response type for `GET /api/cart/:sessionId`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartView {
    pub session_id: String,
    pub items: Vec<CartLine>,
    /// Sum of quantities across all lines
    pub item_count: i64,
    /// Sum of line totals in cents
    pub total_cents: i64,
}

impl CartView {
    /// Build a view and its totals from the session's lines
    pub fn from_lines(session_id: impl Into<String>, items: Vec<CartLine>) -> Self {
        let item_count = items.iter().map(|line| i64::from(line.quantity)).sum();
        let total_cents = items.iter().map(CartLine::line_total_cents).sum();
        Self {
            session_id: session_id.into(),
            items,
            item_count,
            total_cents,
        }
    }
}

/// Response type for `POST /api/cart/remove/:itemId`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveCartItemResponse {
    pub removed: i32,
}
