/**
 * Register Handler
 *
 * This module implements user registration for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate email and password
 * 2. Reject emails that are already registered (fast path)
 * 3. Hash the password with bcrypt
 * 4. Insert the user; a unique violation here also means the email is taken
 * 5. Issue a session token for the new user id
 *
 * The insert is the real uniqueness check: two concurrent registrations for
 * the same email can both pass step 2, but only one insert succeeds.
 */

use axum::{extract::State, response::Json};
use chrono::Utc;
use sqlx::PgPool;

use crate::backend::auth::handlers::types::{CredentialsRequest, IssuedSession, TokenResponse};
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::sessions::{issue_token, SessionKeys};
use crate::backend::auth::users::{create_user, get_user_by_email, is_unique_violation};
use crate::backend::error::BackendError;
use crate::backend::extract::ApiJson;

/// Register a user and issue their first token
///
/// # Errors
///
/// * `SharedError` - invalid email or empty password
/// * `Conflict` - the email is already registered
/// * `Database` / `Internal` - storage, hashing or signing failed
pub async fn register_user(
    pool: &PgPool,
    keys: &SessionKeys,
    request: CredentialsRequest,
) -> Result<IssuedSession, BackendError> {
    let email = request.validated_email()?;

    if get_user_by_email(pool, &email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(BackendError::Conflict);
    }

    let password_hash = hash_password(request.password).await?;

    let user = create_user(pool, &email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email registered concurrently: {}", email);
                BackendError::Conflict
            } else {
                BackendError::Database(e)
            }
        })?;

    let token = issue_token(keys, user.user_id, Utc::now())?;

    tracing::info!("User registered: {} ({})", user.email, user.user_id);

    Ok(IssuedSession {
        user_id: user.user_id,
        token,
    })
}

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "pw123" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn register(
    State(pool): State<PgPool>,
    State(keys): State<SessionKeys>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> Result<Json<TokenResponse>, BackendError> {
    let session = register_user(&pool, &keys, request).await?;
    Ok(Json(TokenResponse {
        token: session.token,
    }))
}
