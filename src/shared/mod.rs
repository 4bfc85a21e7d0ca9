//! Shared Module
//!
//! This module contains types that are shared between the server and its
//! HTTP clients. Everything here is plain serde data with no database or
//! framework dependencies, so a client crate can reuse the same payloads.

/// Shared error types
pub mod error;

/// Catalogue, cart and wishlist payloads
pub mod commerce;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use commerce::{
    AddToCartRequest, CartLine, CartView, Product, ProductListQuery, ToggleWishlistRequest,
    WishlistToggleResponse,
};
