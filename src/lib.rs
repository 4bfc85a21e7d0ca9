//! Shopfront - Main Library
//!
//! Shopfront is a small e-commerce backend built on Axum and PostgreSQL:
//! user registration and login with signed session tokens, a product
//! catalogue, and per-session carts and wishlists.
//!
//! # Module Structure
//!
//! The library is organized into two main modules:
//!
//! - **`shared`** - Types shared between the server and its HTTP clients
//!   - Product, cart and wishlist payloads
//!   - Validation and serialization errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, handlers and the authorization gate
//!   - Credential store, token issuance and verification
//!   - Catalogue, cart and wishlist persistence
//!
//! # Usage
//!
//! ```rust,no_run
//! use shopfront::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for input validation
//! - `backend::error::BackendError` for everything a handler can return;
//!   it renders as a JSON envelope `{"error": ..., "status": ...}`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
