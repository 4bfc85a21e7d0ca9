/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login and dashboard
 * handlers.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::SharedError;

/// Register/login request
///
/// Both endpoints take the same body.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage, never logged)
    pub password: String,
}

impl CredentialsRequest {
    /// Validate the body for registration and return the normalized email
    ///
    /// - Email is trimmed, must be non-empty and contain '@'
    /// - Password must be non-empty
    pub fn validated_email(&self) -> Result<String, SharedError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(SharedError::validation("email", "must not be empty"));
        }
        if !email.contains('@') {
            return Err(SharedError::validation("email", "must contain '@'"));
        }
        if self.password.is_empty() {
            return Err(SharedError::validation("password", "must not be empty"));
        }
        Ok(email.to_string())
    }
}

/// Token response
///
/// Returned by register and login.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed session token (one-hour expiration)
    pub token: String,
}

/// Dashboard response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DashboardResponse {
    pub email: String,
}

/// A user id together with a freshly issued token for it
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user_id: Uuid,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> CredentialsRequest {
        CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_email_is_trimmed() {
        assert_eq!(
            request("  a@x.com ", "pw123").validated_email().unwrap(),
            "a@x.com"
        );
    }

    #[test]
    fn test_short_passwords_are_accepted() {
        assert!(request("a@x.com", "pw123").validated_email().is_ok());
    }

    #[test]
    fn test_invalid_bodies() {
        assert!(request("", "pw").validated_email().is_err());
        assert!(request("no-at-sign", "pw").validated_email().is_err());
        assert!(matches!(
            request("a@x.com", "").validated_email(),
            Err(SharedError::ValidationError { ref field, .. }) if field == "password"
        ));
    }
}
