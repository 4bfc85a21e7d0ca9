//! Commerce Module
//!
//! This module contains the data structures exchanged by the catalogue,
//! cart and wishlist endpoints:
//!
//! - `Product` - A catalogue entry, optionally annotated for a session
//! - `CartLine` / `CartView` - A session's cart
//! - `ToggleWishlistRequest` / `WishlistToggleResponse` - Wishlist toggling
//!
//! Carts and wishlists are keyed by a client-supplied `session_id`.
//!
//! # Usage
//!
//! ```rust
//! use shopfront::shared::commerce::{AddToCartRequest, CartView};
//! ```

pub mod product;
pub mod cart;
pub mod wishlist;

// Re-export all types
pub use product::{Product, ProductListQuery, ListProductsResponse};
pub use cart::{
    AddToCartRequest, CartLine, CartView, RemoveCartItemResponse, MAX_QUANTITY_PER_ITEM,
};
pub use wishlist::{ListWishlistResponse, ToggleWishlistRequest, WishlistToggleResponse};
