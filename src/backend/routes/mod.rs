//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation (CORS, fallback, state)
//! ├── auth_routes.rs  - /register, /login, /dashboard
//! └── api_routes.rs   - /api catalogue, cart and wishlist
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront::backend::routes::create_router;
//! use shopfront::backend::server::AppState;
//!
//! let router = create_router(AppState::new(pool, keys));
//! ```

/// Main router creation
pub mod router;

/// Authentication routes
pub mod auth_routes;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
