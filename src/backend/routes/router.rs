/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * - CORS: any origin, `GET`/`POST`/`OPTIONS`, `content-type` and `token`
 *   request headers
 * - Fallbacks: unknown routes (404) and unsupported methods on known paths
 *   (405) answer with the JSON error envelope
 */

use axum::{
    http::{header, HeaderName, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::backend::error::{method_not_allowed_fallback, not_found_fallback};
use crate::backend::middleware::TOKEN_HEADER;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::auth_routes::configure_auth_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Database pool and session keys
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_auth_routes(router, &app_state);
    let router = configure_api_routes(router);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(TOKEN_HEADER)]);

    router
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        .layer(cors)
        .with_state(app_state)
}
