//! Seed catalogue
//!
//! The product list inserted by `POST /api/insert-data` is compiled into the
//! binary from `data/products.json`.

use serde::Deserialize;

use crate::shared::SharedError;

const SEED_JSON: &str = include_str!("../../../data/products.json");

/// One product of the seed file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SeedProduct {
    pub product_name: String,
    pub product_img: String,
    #[serde(default)]
    pub description: String,
    /// Unit price in cents
    pub price_cents: i64,
    #[serde(default)]
    pub ratings: f64,
}

/// Parse the embedded seed catalogue
pub fn seed_catalogue() -> Result<Vec<SeedProduct>, SharedError> {
    Ok(serde_json::from_str(SEED_JSON)?)
}
