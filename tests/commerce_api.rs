//! Catalogue, cart and wishlist over HTTP
//!
//! Tests marked `#[ignore]` need PostgreSQL; run them with `DATABASE_URL`
//! set and `cargo test -- --ignored`.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use serial_test::serial;

use common::{get, offline_app, post_empty, post_json, send, TestDatabase};

/// Seed the catalogue and return the id of the first product
async fn seed(app: &axum::Router) -> i64 {
    let (status, _) = send(app, post_empty("/api/insert-data")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app, get("/api/products", None)).await;
    body["products"][0]["product_id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_add_to_cart_rejects_zero_quantity() {
    let app = offline_app();

    let (status, body) = send(
        &app,
        post_json(
            "/api/cart/add",
            json!({"session_id": "s1", "product_id": 1, "quantity": 0}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_add_to_cart_rejects_blank_session() {
    let app = offline_app();

    let (status, _) = send(
        &app,
        post_json("/api/cart/add", json!({"session_id": "  ", "product_id": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_item_id_is_bad_request() {
    let app = offline_app();

    let (status, body) = send(&app, post_empty("/api/cart/remove/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_wishlist_toggle_rejects_bad_product_id() {
    let app = offline_app();

    let (status, _) = send(
        &app,
        post_json("/api/wishlist/toggle", json!({"session_id": "s1", "product_id": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_health_reports_database_time() {
    let db = TestDatabase::new().await;
    let app = db.app();

    let (status, body) = send(&app, get("/api", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["now"].is_string());
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_seeding_is_idempotent() {
    let db = TestDatabase::new().await;
    let app = db.app();

    let (_, first) = send(&app, post_empty("/api/insert-data")).await;
    let (_, second) = send(&app, post_empty("/api/insert-data")).await;

    assert!(first["inserted"].as_u64().unwrap() > 0);
    assert_eq!(second["inserted"], 0);

    let (_, body) = send(&app, get("/api/products", None)).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len() as u64, first["inserted"].as_u64().unwrap());
    assert!(products
        .iter()
        .all(|p| p["is_added"] == false && p["is_favourite"] == false));
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_get_product() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let product_id = seed(&app).await;

    let (status, body) = send(&app, get(&format!("/api/products/{}", product_id), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["product_id"], product_id);

    let (status, body) = send(&app, get("/api/products/999999", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_cart_flow() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let product_id = seed(&app).await;

    let (status, line) = send(
        &app,
        post_json("/api/cart/add", json!({"session_id": "s1", "product_id": product_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(line["quantity"], 1);
    let item_id = line["item_id"].as_i64().unwrap();

    // Adding the same product again raises the quantity of the same line
    let (_, line) = send(
        &app,
        post_json(
            "/api/cart/add",
            json!({"session_id": "s1", "product_id": product_id, "quantity": 2}),
        ),
    )
    .await;
    assert_eq!(line["item_id"], item_id);
    assert_eq!(line["quantity"], 3);

    let (_, cart) = send(&app, get("/api/cart/s1", None)).await;
    let price = cart["items"][0]["price_cents"].as_i64().unwrap();
    assert_eq!(cart["items"].as_array().unwrap().len(), 1);
    assert_eq!(cart["item_count"], 3);
    assert_eq!(cart["total_cents"], price * 3);

    let (_, line) = send(&app, post_empty(&format!("/api/cart/incrementQty/{}", item_id))).await;
    assert_eq!(line["quantity"], 4);

    for _ in 0..5 {
        send(&app, post_empty(&format!("/api/cart/decrementQty/{}", item_id))).await;
    }
    let (_, cart) = send(&app, get("/api/cart/s1", None)).await;
    assert_eq!(cart["items"][0]["quantity"], 1);

    // Other sessions do not see this cart
    let (_, other) = send(&app, get("/api/cart/s2", None)).await;
    assert_eq!(other["items"], json!([]));
    assert_eq!(other["total_cents"], 0);

    let (status, body) = send(&app, post_empty(&format!("/api/cart/remove/{}", item_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"removed": item_id}));

    let (status, _) = send(&app, post_empty(&format!("/api/cart/remove/{}", item_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, post_empty(&format!("/api/cart/incrementQty/{}", item_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_cart_quantity_is_capped() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let product_id = seed(&app).await;
    let body = json!({"session_id": "s1", "product_id": product_id, "quantity": 9999});

    send(&app, post_json("/api/cart/add", body.clone())).await;
    let (status, line) = send(&app, post_json("/api/cart/add", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(line["quantity"], 9999);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_add_unknown_product_is_not_found() {
    let db = TestDatabase::new().await;
    let app = db.app();

    let (status, body) = send(
        &app,
        post_json("/api/cart/add", json!({"session_id": "s1", "product_id": 424242})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_wishlist_toggle_and_flags() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let product_id = seed(&app).await;
    let toggle = json!({"session_id": "s1", "product_id": product_id});

    let (status, body) = send(&app, post_json("/api/wishlist/toggle", toggle.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"product_id": product_id, "is_favourite": true}));

    send(
        &app,
        post_json("/api/cart/add", json!({"session_id": "s1", "product_id": product_id})),
    )
    .await;

    let (_, wishlist) = send(&app, get("/api/wishlist/s1", None)).await;
    let products = wishlist["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["is_added"], true);

    let (_, listing) = send(&app, get("/api/products?session_id=s1", None)).await;
    let flagged: Vec<&Value> = listing["products"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|p| p["is_favourite"] == true && p["is_added"] == true)
        .collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0]["product_id"], product_id);

    let (_, body) = send(&app, post_json("/api/wishlist/toggle", toggle)).await;
    assert_eq!(body["is_favourite"], false);

    let (_, wishlist) = send(&app, get("/api/wishlist/s1", None)).await;
    assert_eq!(wishlist["products"], json!([]));
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_concurrent_wishlist_toggles_cancel_out() {
    let db = TestDatabase::new().await;
    let app = db.app();
    let product_id = seed(&app).await;

    for round in 0..20 {
        let session_id = format!("race-{}", round);
        let toggle = json!({"session_id": session_id, "product_id": product_id});

        let ((first_status, first), (second_status, second)) = tokio::join!(
            send(&app, post_json("/api/wishlist/toggle", toggle.clone())),
            send(&app, post_json("/api/wishlist/toggle", toggle.clone())),
        );
        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_ne!(first["is_favourite"], second["is_favourite"], "round {}", round);

        let (_, wishlist) = send(&app, get(&format!("/api/wishlist/{}", session_id), None)).await;
        assert_eq!(wishlist["products"], json!([]), "round {}", round);
    }
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_wishlist_unknown_product_is_not_found() {
    let db = TestDatabase::new().await;
    let app = db.app();

    let (status, _) = send(
        &app,
        post_json("/api/wishlist/toggle", json!({"session_id": "s1", "product_id": 424242})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
