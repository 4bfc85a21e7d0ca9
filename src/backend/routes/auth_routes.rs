/**
 * Authentication Routes
 *
 * - `POST /register` - User registration
 * - `POST /login` - User login
 * - `GET /dashboard` - Current user's email (requires the `token` header)
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{dashboard, login, register};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure authentication routes
///
/// The gate is applied with `route_layer`, so it only runs for requests
/// that matched a protected route; unknown paths still reach the 404
/// fallback.
pub fn configure_auth_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/dashboard", get(dashboard))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}
