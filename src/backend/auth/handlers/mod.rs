//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request and response types
//! ├── register.rs   - POST /register
//! ├── login.rs      - POST /login
//! └── dashboard.rs  - GET /dashboard (behind the gate)
//! ```
//!
//! Register and login are split into a plain async function
//! (`register_user`, `login_user`) and a thin Axum handler around it.

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Dashboard handler
pub mod dashboard;

// Re-export commonly used types
pub use types::{CredentialsRequest, DashboardResponse, IssuedSession, TokenResponse};

// Re-export handlers
pub use register::{register, register_user};
pub use login::{login, login_user};
pub use dashboard::dashboard;
