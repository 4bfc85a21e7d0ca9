//! Cart HTTP Handlers
//!
//! Carts are keyed by the client-supplied `session_id`, independent of any
//! login token.

use axum::{extract::State, Json};
use sqlx::PgPool;

use super::db;
use crate::backend::catalog::db::is_foreign_key_violation;
use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::shared::commerce::{AddToCartRequest, CartLine, CartView, RemoveCartItemResponse};
use crate::shared::error::require_session_id;

/// Add a product to the cart, or raise the quantity of its existing line
pub async fn add_to_cart(
    State(pool): State<PgPool>,
    ApiJson(request): ApiJson<AddToCartRequest>,
) -> Result<Json<CartLine>, BackendError> {
    let session_id = request.validate()?;

    let line = db::add_item(&pool, session_id, request.product_id, request.quantity)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                BackendError::not_found(format!("product {}", request.product_id))
            } else {
                BackendError::Database(e)
            }
        })?;

    tracing::debug!(
        "Cart {} now holds {} x product {}",
        line.session_id,
        line.quantity,
        line.product_id
    );
    Ok(Json(line))
}

/// View a session's cart with totals
pub async fn get_cart(
    State(pool): State<PgPool>,
    ApiPath(session_id): ApiPath<String>,
) -> Result<Json<CartView>, BackendError> {
    let session_id = require_session_id(&session_id)?;
    let items = db::list_items(&pool, session_id).await?;
    Ok(Json(CartView::from_lines(session_id, items)))
}

/// Delete a cart line
pub async fn remove_from_cart(
    State(pool): State<PgPool>,
    ApiPath(item_id): ApiPath<i32>,
) -> Result<Json<RemoveCartItemResponse>, BackendError> {
    if !db::remove_item(&pool, item_id).await? {
        return Err(BackendError::not_found(format!("cart item {}", item_id)));
    }
    Ok(Json(RemoveCartItemResponse { removed: item_id }))
}

async fn adjust(pool: &PgPool, item_id: i32, delta: i32) -> Result<Json<CartLine>, BackendError> {
    db::adjust_quantity(pool, item_id, delta)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found(format!("cart item {}", item_id)))
}

/// Add one unit to a cart line
pub async fn increment_quantity(
    State(pool): State<PgPool>,
    ApiPath(item_id): ApiPath<i32>,
) -> Result<Json<CartLine>, BackendError> {
    adjust(&pool, item_id, 1).await
}

/// Remove one unit from a cart line (never below 1)
pub async fn decrement_quantity(
    State(pool): State<PgPool>,
    ApiPath(item_id): ApiPath<i32>,
) -> Result<Json<CartLine>, BackendError> {
    adjust(&pool, item_id, -1).await
}
