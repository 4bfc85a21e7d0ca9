//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP server backed by
//! PostgreSQL.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route tables and router assembly
//! - **`error`** - `BackendError` and its JSON rendering
//! - **`extract`** - Json/Path/Query extractors that reject with `BackendError`
//! - **`middleware`** - The authorization gate
//! - **`auth`** - Credential store, password hashing, session tokens
//! - **`catalog`** - Products and the seed catalogue
//! - **`cart`** - Per-session carts
//! - **`wishlist`** - Per-session wishlists
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── error/          - Error types
//! ├── extract.rs      - Request extractors
//! ├── middleware/     - Request middleware
//! ├── auth/           - Authentication
//! ├── catalog/        - Product catalogue
//! ├── cart/           - Carts
//! └── wishlist/       - Wishlists
//! ```
//!
//! # State Management
//!
//! `AppState` holds the connection pool and the token keys. Neither is
//! mutable, and the database is the only place request data lives between
//! requests.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Request extractors
pub mod extract;

/// Middleware for request processing
pub mod middleware;

/// Authentication and user management
pub mod auth;

/// Product catalogue
pub mod catalog;

/// Shopping carts
pub mod cart;

/// Wishlists
pub mod wishlist;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
