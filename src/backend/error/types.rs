/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 * Each variant maps to exactly one HTTP status code.
 *
 * # Error Categories
 *
 * ## Authorization gate
 *
 * - `AuthMissing` - no session token on a protected request (403)
 * - `AuthInvalid` - bad signature, expired or malformed token (401)
 *
 * ## Credentials
 *
 * - `Conflict` - email already registered (409)
 * - `UnknownUser` - login for an email with no account (401)
 * - `InvalidCredentials` - password does not match (401)
 *
 * ## Everything else
 *
 * - `NotFound` - a referenced row does not exist (404)
 * - `SharedError` - request validation failed (400)
 * - `Database` / `Internal` - server-side failures (500); the detail is
 *   logged and never sent to the client
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Message sent to clients for any 500 response
pub const GENERIC_SERVER_ERROR: &str = "Server Error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use shopfront::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("cart item 42");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// No token supplied on a protected route
    #[error("Not Authorized")]
    AuthMissing,

    /// Token failed signature, expiry or format checks
    #[error("Token is not valid")]
    AuthInvalid,

    /// A user with this email already exists
    #[error("User already exists")]
    Conflict,

    /// Login attempted for an email with no account
    #[error("User doesn't exist")]
    UnknownUser,

    /// Password did not match the stored hash
    #[error("Password or Email is incorrect")]
    InvalidCredentials,

    /// A referenced resource does not exist
    #[error("Not found: {what}")]
    NotFound {
        /// What was looked up, e.g. "product 12"
        what: String,
    },

    /// Request validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other server-side failure (hashing, signing, task join)
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the server log
        message: String,
    },
}

impl BackendError {
    /// Create a new not-found error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `AuthMissing` - 403 Forbidden
    /// - `AuthInvalid`, `UnknownUser`, `InvalidCredentials` - 401 Unauthorized
    /// - `Conflict` - 409 Conflict
    /// - `NotFound` - 404 Not Found
    /// - `SharedError` - 400 Bad Request
    /// - `Database`, `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AuthMissing => StatusCode::FORBIDDEN,
            Self::AuthInvalid | Self::UnknownUser | Self::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::Conflict => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Server-side failures collapse to a generic message.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal { .. } => GENERIC_SERVER_ERROR.to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the detail of this error belongs in the server log only
    pub fn is_server_fault(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::SharedError(SharedError::from(err))
    }
}

impl From<bcrypt::BcryptError> for BackendError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::internal(format!("bcrypt: {}", err))
    }
}

impl From<tokio::task::JoinError> for BackendError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("blocking task failed: {}", err))
    }
}
