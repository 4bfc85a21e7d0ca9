//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - The authorization gate for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{middleware, routing::get, Router};
//! use shopfront::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/dashboard", get(dashboard))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, authorize, AuthUser, AuthenticatedUser, TOKEN_HEADER};
