//! Wishlist HTTP Handlers

use axum::{extract::State, Json};
use sqlx::PgPool;

use super::db;
use crate::backend::catalog::db::is_foreign_key_violation;
use crate::backend::error::BackendError;
use crate::backend::extract::{ApiJson, ApiPath};
use crate::shared::commerce::{ListWishlistResponse, ToggleWishlistRequest, WishlistToggleResponse};
use crate::shared::error::require_session_id;

/// Add the product to the wishlist, or remove it if already there
pub async fn toggle_wishlist(
    State(pool): State<PgPool>,
    ApiJson(request): ApiJson<ToggleWishlistRequest>,
) -> Result<Json<WishlistToggleResponse>, BackendError> {
    let session_id = request.validate()?;

    let is_favourite = db::toggle(&pool, session_id, request.product_id)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                BackendError::not_found(format!("product {}", request.product_id))
            } else {
                BackendError::Database(e)
            }
        })?;

    Ok(Json(WishlistToggleResponse {
        product_id: request.product_id,
        is_favourite,
    }))
}

/// List a session's wishlist
pub async fn get_wishlist(
    State(pool): State<PgPool>,
    ApiPath(session_id): ApiPath<String>,
) -> Result<Json<ListWishlistResponse>, BackendError> {
    let session_id = require_session_id(&session_id)?;
    let products = db::list(&pool, session_id).await?;
    Ok(Json(ListWishlistResponse {
        session_id: session_id.to_string(),
        products,
    }))
}
