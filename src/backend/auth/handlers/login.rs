/**
 * Login Handler
 *
 * This module implements user authentication for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token
 *
 * An unknown email and a wrong password are distinct errors, though both
 * answer 401.
 */

use axum::{extract::State, response::Json};
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{CredentialsRequest, IssuedSession, TokenResponse};
use crate::backend::auth::passwords::verify_password;
use crate::backend::auth::sessions::{issue_token, SessionKeys};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;

/// Check credentials and issue a token for the existing user
///
/// # Errors
///
/// * `UnknownUser` - no account for this email
/// * `InvalidCredentials` - the password does not match
/// * `Database` / `Internal` - storage, hashing or signing failed
pub async fn login_user(
    pool: &PgPool,
    keys: &SessionKeys,
    request: CredentialsRequest,
) -> Result<IssuedSession, BackendError> {
    let email = request.email.trim();

    let user = get_user_by_email(pool, email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", email);
            BackendError::UnknownUser
        })?;

    if !verify_password(request.password, user.password_hash.clone()).await? {
        tracing::warn!("Invalid password for user: {}", user.user_id);
        return Err(BackendError::InvalidCredentials);
    }

    let token = issue_token(keys, user.user_id, Utc::now())?;

    tracing::info!("User logged in: {} ({})", user.email, user.user_id);

    Ok(IssuedSession {
        user_id: user.user_id,
        token,
    })
}

/// Login handler
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "pw123" }
/// ```
pub async fn login(
    State(pool): State<PgPool>,
    State(keys): State<SessionKeys>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let session = login_user(&pool, &keys, request).await?;
    Ok(Json(TokenResponse {
        token: session.token,
    }))
}
