//! Shopping Cart
//!
//! - `db` - cart line queries
//! - `handlers` - `/api/cart/*`

pub mod db;
pub mod handlers;

pub use handlers::{add_to_cart, decrement_quantity, get_cart, increment_quantity, remove_from_cart};
