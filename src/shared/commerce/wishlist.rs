//! Wishlist Data Structures

use serde::{Deserialize, Serialize};

use super::product::Product;
use crate::shared::error::{require_session_id, SharedError};

/// Request body for `POST /api/wishlist/toggle`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleWishlistRequest {
    pub session_id: String,
    pub product_id: i32,
}

impl ToggleWishlistRequest {
    /// Returns the trimmed session id
    pub fn validate(&self) -> Result<&str, SharedError> {
        let session_id = require_session_id(&self.session_id)?;
        if self.product_id <= 0 {
            return Err(SharedError::validation("product_id", "must be positive"));
        }
        Ok(session_id)
    }
}

/// Result of a toggle: the product's new state for the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WishlistToggleResponse {
    pub product_id: i32,
    pub is_favourite: bool,
}

/// Response type for `GET /api/wishlist/:sessionId`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListWishlistResponse {
    pub session_id: String,
    pub products: Vec<Product>,
}
