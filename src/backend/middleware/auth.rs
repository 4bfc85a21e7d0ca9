/**
 * Authorization Gate
 *
 * This module protects routes that require a logged-in user. The session
 * token travels in a custom `token` request header (not `Authorization`).
 *
 * - No header, or an empty one → 403 "Not Authorized"
 * - Header present but the token fails verification → 401 "Token is not valid"
 * - Otherwise the user id from the token is attached to the request
 */

use axum::{
    extract::{FromRef, FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::backend::auth::sessions::{verify_token, SessionKeys, TokenRejection};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Request header carrying the session token
pub const TOKEN_HEADER: &str = "token";

/// Authenticated user data extracted from the session token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Verify the `token` header against the session keys
///
/// Pure with respect to `now`, so expiry can be tested without waiting.
pub fn authorize(
    keys: &SessionKeys,
    headers: &HeaderMap,
    now: DateTime<Utc>,
) -> Result<Uuid, BackendError> {
    let raw = match headers.get(TOKEN_HEADER) {
        Some(value) => value.to_str().map_err(|_| {
            tracing::warn!("Token header is not valid UTF-8");
            BackendError::AuthInvalid
        })?,
        None => {
            tracing::warn!("Missing token header");
            return Err(BackendError::AuthMissing);
        }
    };

    verify_token(keys, raw, now).map_err(|rejection: TokenRejection| {
        tracing::warn!("Rejected token: {}", rejection);
        BackendError::from(rejection)
    })
}

/// Authentication middleware
///
/// Runs the gate and attaches [`AuthenticatedUser`] to the request
/// extensions for the handler.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user_id = authorize(&app_state.session_keys, request.headers(), Utc::now())?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Uses the user attached by [`auth_middleware`] when present and runs the
/// gate itself otherwise, so a handler taking `AuthUser` is protected even
/// on a route without the middleware.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    SessionKeys: FromRef<S>,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>() {
            return Ok(AuthUser(*user));
        }

        let keys = SessionKeys::from_ref(state);
        let user_id = authorize(&keys, &parts.headers, Utc::now())?;
        Ok(AuthUser(AuthenticatedUser { user_id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::{issue_token, TOKEN_TTL_SECS};
    use axum::http::{HeaderValue, StatusCode};
    use chrono::Duration;

    fn keys() -> SessionKeys {
        SessionKeys::new(b"gate-test-secret")
    }

    fn headers_with(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, HeaderValue::from_str(token).unwrap());
        headers
    }

    #[test]
    fn test_valid_token_yields_user_id() {
        let keys = keys();
        let now = Utc::now();
        let user_id = Uuid::new_v4();
        let token = issue_token(&keys, user_id, now).unwrap();

        assert_eq!(authorize(&keys, &headers_with(&token), now).unwrap(), user_id);
    }

    #[test]
    fn test_missing_header_is_forbidden() {
        let err = authorize(&keys(), &HeaderMap::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, BackendError::AuthMissing));
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_empty_header_is_forbidden() {
        let err = authorize(&keys(), &headers_with(""), Utc::now()).unwrap_err();
        assert!(matches!(err, BackendError::AuthMissing));
    }

    #[test]
    fn test_bad_token_is_unauthorized() {
        let err = authorize(&keys(), &headers_with("abc"), Utc::now()).unwrap_err();
        assert!(matches!(err, BackendError::AuthInvalid));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_expired_token_is_unauthorized() {
        let keys = keys();
        let issued = Utc::now();
        let token = issue_token(&keys, Uuid::new_v4(), issued).unwrap();
        let later = issued + Duration::seconds(TOKEN_TTL_SECS + 1);

        let err = authorize(&keys, &headers_with(&token), later).unwrap_err();
        assert!(matches!(err, BackendError::AuthInvalid));
    }

    #[test]
    fn test_token_from_other_secret_is_unauthorized() {
        let now = Utc::now();
        let token = issue_token(&SessionKeys::new(b"other"), Uuid::new_v4(), now).unwrap();

        let err = authorize(&keys(), &headers_with(&token), now).unwrap_err();
        assert!(matches!(err, BackendError::AuthInvalid));
    }

    #[tokio::test]
    async fn test_extractor_prefers_request_extension() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/dashboard")
            .body(())
            .unwrap()
            .into_parts();
        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
        };
        parts.extensions.insert(user);

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap();
        assert_eq!(extracted, user);
    }

    #[tokio::test]
    async fn test_extractor_runs_gate_without_extension() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/dashboard")
            .body(())
            .unwrap()
            .into_parts();

        let err = AuthUser::from_request_parts(&mut parts, &keys())
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::AuthMissing));
    }
}
