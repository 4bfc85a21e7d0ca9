/**
 * Dashboard Handler
 *
 * GET /dashboard returns the email of the user the session token was
 * issued for. The route sits behind the authorization gate, so the handler
 * only runs with a verified user id.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::handlers::types::DashboardResponse;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Dashboard handler
///
/// # Errors
///
/// * `NotFound` - the token is valid but the user row is gone
pub async fn dashboard(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<DashboardResponse>, BackendError> {
    let account = get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token for missing user: {}", user.user_id);
            BackendError::not_found(format!("user {}", user.user_id))
        })?;

    Ok(Json(DashboardResponse {
        email: account.email,
    }))
}
