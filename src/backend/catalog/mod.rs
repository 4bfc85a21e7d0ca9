//! Product Catalogue
//!
//! - `db` - product queries and seeding
//! - `seed` - the embedded seed catalogue
//! - `handlers` - `/api`, `/api/insert-data`, `/api/products`

pub mod db;
pub mod seed;
pub mod handlers;

pub use handlers::{get_product, health, insert_data, list_products};
