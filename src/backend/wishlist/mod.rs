//! Wishlist
//!
//! - `db` - wishlist queries
//! - `handlers` - `/api/wishlist/*`

pub mod db;
pub mod handlers;

pub use handlers::{get_wishlist, toggle_wishlist};
