/**
 * Application State Management
 *
 * This module defines the application state handed to every handler and
 * the `FromRef` implementations that let handlers extract just the part
 * they need.
 *
 * # Thread Safety
 *
 * `AppState` holds no mutable data. The pool is internally synchronized
 * and the signing keys are immutable behind an `Arc`, so cloning the state
 * per request is cheap and lock-free.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::PgPool;
 *
 * async fn handler(State(pool): State<PgPool>) {
 *     // Run queries against the pool
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::sessions::SessionKeys;

/// Application state shared by all handlers
///
/// # Fields
///
/// * `db_pool` - PostgreSQL connection pool, the only source of truth
/// * `session_keys` - Keys used to issue and verify session tokens
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,

    /// Token signing and verification keys
    pub session_keys: SessionKeys,
}

impl AppState {
    pub fn new(db_pool: PgPool, session_keys: SessionKeys) -> Self {
        Self {
            db_pool,
            session_keys,
        }
    }
}

/// Implement FromRef for PgPool
///
/// This allows handlers to extract the pool directly using `State(PgPool)`.
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for SessionKeys
///
/// Used by the authorization gate and by the register/login handlers.
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}
