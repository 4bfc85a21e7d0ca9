/**
 * Session Tokens
 *
 * This module issues and verifies the signed session tokens handed out by
 * register and login.
 *
 * A token is an HS256 JWT carrying `{sub, iat, exp}`. It is tamper-evident
 * but not encrypted: anyone can read the payload, only the server can mint
 * one. Nothing is stored server-side, so a token stays valid until `exp`.
 */

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Token lifetime in seconds (one hour)
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

struct KeyPair {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Signing and verification keys derived from the server secret
#[derive(Clone)]
pub struct SessionKeys {
    inner: Arc<KeyPair>,
}

impl SessionKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            inner: Arc::new(KeyPair {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
        }
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys").finish_non_exhaustive()
    }
}

/// Why a token was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    /// No token, or an empty one
    Missing,
    /// `now` is at or past `exp`
    Expired,
    /// Signature does not match the payload
    BadSignature,
    /// Not a decodable JWT with the expected claims
    Malformed(String),
}

impl fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no token supplied"),
            Self::Expired => write!(f, "token expired"),
            Self::BadSignature => write!(f, "signature mismatch"),
            Self::Malformed(detail) => write!(f, "malformed token: {}", detail),
        }
    }
}

impl From<TokenRejection> for BackendError {
    fn from(rejection: TokenRejection) -> Self {
        match rejection {
            TokenRejection::Missing => BackendError::AuthMissing,
            _ => BackendError::AuthInvalid,
        }
    }
}

/// Create a token for a user, valid for `TOKEN_TTL_SECS` from `now`
pub fn issue_token(
    keys: &SessionKeys,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<String, BackendError> {
    let iat = now.timestamp();
    let claims = Claims {
        sub: user_id,
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(&Header::new(Algorithm::HS256), &claims, &keys.inner.encoding)
        .map_err(|e| BackendError::internal(format!("failed to sign token: {}", e)))
}

/// Verify a token and return its claims
///
/// Expiry is checked against `now` with no leeway: a token is valid only
/// while `now < exp`.
pub fn decode_claims(
    keys: &SessionKeys,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Claims, TokenRejection> {
    let token = token.trim();
    if token.is_empty() {
        return Err(TokenRejection::Missing);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(token, &keys.inner.decoding, &validation).map_err(|e| {
        match e.kind() {
            ErrorKind::InvalidSignature => TokenRejection::BadSignature,
            _ => TokenRejection::Malformed(e.to_string()),
        }
    })?;

    if now.timestamp() >= data.claims.exp {
        return Err(TokenRejection::Expired);
    }

    Ok(data.claims)
}

/// Verify a token and return the user it was issued for
pub fn verify_token(
    keys: &SessionKeys,
    token: &str,
    now: DateTime<Utc>,
) -> Result<Uuid, TokenRejection> {
    decode_claims(keys, token, now).map(|claims| claims.sub)
}
