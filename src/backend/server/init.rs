/**
 * Server Initialization
 *
 * This module builds the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Build the database pool (probe + migrations, see `config`)
 * 2. Derive the session keys from the configured secret
 * 3. Assemble `AppState` and the router
 */

use axum::Router;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// Nothing here fails: an unreachable database is logged by
/// `load_database` and surfaces later as 500 responses.
pub async fn create_app(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing shopfront backend server");

    let db_pool = load_database(config).await;
    let session_keys = SessionKeys::new(config.jwt_secret.as_bytes());

    let app_state = AppState::new(db_pool, session_keys);
    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
