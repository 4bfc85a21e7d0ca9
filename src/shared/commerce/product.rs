//! Product Data Structure
//!
//! Represents an entry in the product catalogue.

use serde::{Deserialize, Serialize};

/// A product as returned by the catalogue endpoints
///
/// `is_added` and `is_favourite` describe the requesting session: they are
/// derived from that session's cart and wishlist, and are both `false` when
/// no session is given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalogue ID
    pub product_id: i32,
    /// Display name (unique)
    pub product_name: String,
    /// Image URL
    pub product_img: String,
    /// Free-form description
    pub description: String,
    /// Unit price in cents
    pub price_cents: i64,
    /// Average rating
    pub ratings: f64,
    /// Whether the product is in the session's cart
    pub is_added: bool,
    /// Whether the product is in the session's wishlist
    pub is_favourite: bool,
}

/// Query string for `GET /api/products`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListQuery {
    pub session_id: Option<String>,
}

/// Response type for listing products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
}
