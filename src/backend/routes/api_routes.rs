/**
 * API Route Handlers
 *
 * This module defines the public `/api` routes: the liveness probe, the
 * product catalogue, carts and wishlists. None of them require a session
 * token; carts and wishlists are keyed by the client-supplied `session_id`.
 *
 * # Routes
 *
 * ## Catalogue
 * - `GET /api` - Database liveness probe
 * - `POST /api/insert-data` - Seed the catalogue
 * - `GET /api/products` - List products
 * - `GET /api/products/{productId}` - Single product
 *
 * ## Cart
 * - `POST /api/cart/add` - Add to cart
 * - `GET /api/cart/{sessionId}` - View cart
 * - `POST /api/cart/remove/{itemId}` - Remove a line
 * - `POST /api/cart/incrementQty/{itemId}` - +1
 * - `POST /api/cart/decrementQty/{itemId}` - -1 (never below 1)
 *
 * ## Wishlist
 * - `POST /api/wishlist/toggle` - Toggle favourite
 * - `GET /api/wishlist/{sessionId}` - List favourites
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::cart::{
    add_to_cart, decrement_quantity, get_cart, increment_quantity, remove_from_cart,
};
use crate::backend::catalog::{get_product, health, insert_data, list_products};
use crate::backend::server::state::AppState;
use crate::backend::wishlist::{get_wishlist, toggle_wishlist};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Catalogue endpoints
        .route("/api", get(health))
        .route("/api/insert-data", post(insert_data))
        .route("/api/products", get(list_products))
        .route("/api/products/{product_id}", get(get_product))
        // Cart endpoints
        .route("/api/cart/add", post(add_to_cart))
        .route("/api/cart/{session_id}", get(get_cart))
        .route("/api/cart/remove/{item_id}", post(remove_from_cart))
        .route("/api/cart/incrementQty/{item_id}", post(increment_quantity))
        .route("/api/cart/decrementQty/{item_id}", post(decrement_quantity))
        // Wishlist endpoints
        .route("/api/wishlist/toggle", post(toggle_wishlist))
        .route("/api/wishlist/{session_id}", get(get_wishlist))
}
