//! Catalogue HTTP Handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use super::{db, seed};
use crate::backend::error::BackendError;
use crate::backend::extract::{ApiPath, ApiQuery};
use crate::shared::commerce::{ListProductsResponse, Product, ProductListQuery};

/// Response type for `GET /api`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub now: DateTime<Utc>,
}

/// Response type for `POST /api/insert-data`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedResponse {
    pub message: String,
    pub inserted: u64,
}

/// A blank `session_id` is the same as none
fn session_filter(query: &ProductListQuery) -> Option<&str> {
    query
        .session_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Database liveness probe
pub async fn health(State(pool): State<PgPool>) -> Result<Json<HealthResponse>, BackendError> {
    let now = db::database_now(&pool).await?;
    Ok(Json(HealthResponse { now }))
}

/// Insert the seed catalogue
pub async fn insert_data(State(pool): State<PgPool>) -> Result<Json<SeedResponse>, BackendError> {
    let products = seed::seed_catalogue()
        .map_err(|e| BackendError::internal(format!("seed catalogue: {}", e)))?;

    let inserted = db::insert_seed_products(&pool, &products).await?;
    tracing::info!("Seeded {} of {} products", inserted, products.len());

    Ok(Json(SeedResponse {
        message: "Data inserted successfully".to_string(),
        inserted,
    }))
}

/// List products, with cart/wishlist flags for the given session
pub async fn list_products(
    State(pool): State<PgPool>,
    ApiQuery(query): ApiQuery<ProductListQuery>,
) -> Result<Json<ListProductsResponse>, BackendError> {
    let products = db::list_products(&pool, session_filter(&query)).await?;
    Ok(Json(ListProductsResponse { products }))
}

/// Get one product
pub async fn get_product(
    State(pool): State<PgPool>,
    ApiPath(product_id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<ProductListQuery>,
) -> Result<Json<Product>, BackendError> {
    let product = db::get_product(&pool, product_id, session_filter(&query))
        .await?
        .ok_or_else(|| BackendError::not_found(format!("product {}", product_id)))?;
    Ok(Json(product))
}
