//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Credential store (users table)
//! ├── passwords.rs    - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - Token issuance and verification
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → user created → token returned
//! 2. **Login**: email + password → credentials verified → token returned
//! 3. **Dashboard**: `token` header → gate verifies → user's email returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt (cost 10) before storage
//! - Tokens are HS256 JWTs, valid for one hour, with no server-side state
//! - Server-side failures never reach the client in detail

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// Token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{dashboard, login, register, CredentialsRequest, TokenResponse};
pub use sessions::{issue_token, verify_token, SessionKeys, TokenRejection};
