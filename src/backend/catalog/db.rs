//! Database operations for the product catalogue
//!
//! Per-session flags (`is_added`, `is_favourite`) are computed in SQL from
//! the cart and wishlist tables. A `NULL` session matches no rows, so both
//! flags come back false when no session is given.

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, PgPool, Row};

use super::seed::SeedProduct;
use crate::shared::commerce::Product;

/// Map a row carrying the product columns and both session flags
pub(crate) fn product_from_row(row: &PgRow) -> Product {
    Product {
        product_id: row.get("product_id"),
        product_name: row.get("product_name"),
        product_img: row.get("product_img"),
        description: row.get("description"),
        price_cents: row.get("price_cents"),
        ratings: row.get("ratings"),
        is_added: row.get("is_added"),
        is_favourite: row.get("is_favourite"),
    }
}

/// Whether an insert failed because it referenced a missing product
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_foreign_key_violation())
        .unwrap_or(false)
}

/// List every product, ordered by id
pub async fn list_products(
    pool: &PgPool,
    session_id: Option<&str>,
) -> Result<Vec<Product>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.product_id, p.product_name, p.product_img, p.description, p.price_cents, p.ratings,
               EXISTS (SELECT 1 FROM cart_items c
                       WHERE c.product_id = p.product_id AND c.session_id = $1) AS is_added,
               EXISTS (SELECT 1 FROM wishlist_items w
                       WHERE w.product_id = p.product_id AND w.session_id = $1) AS is_favourite
        FROM products p
        ORDER BY p.product_id
        "#
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(product_from_row).collect())
}

/// Get a single product by id
pub async fn get_product(
    pool: &PgPool,
    product_id: i32,
    session_id: Option<&str>,
) -> Result<Option<Product>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.product_id, p.product_name, p.product_img, p.description, p.price_cents, p.ratings,
               EXISTS (SELECT 1 FROM cart_items c
                       WHERE c.product_id = p.product_id AND c.session_id = $2) AS is_added,
               EXISTS (SELECT 1 FROM wishlist_items w
                       WHERE w.product_id = p.product_id AND w.session_id = $2) AS is_favourite
        FROM products p
        WHERE p.product_id = $1
        "#
    )
    .bind(product_id)
    .bind(session_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(product_from_row))
}

/// Insert the seed catalogue, skipping names that already exist
///
/// Runs in one transaction. Returns the number of rows actually inserted.
pub async fn insert_seed_products(
    pool: &PgPool,
    products: &[SeedProduct],
) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for product in products {
        let result = sqlx::query(
            r#"
            INSERT INTO products (product_name, product_img, description, price_cents, ratings)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (product_name) DO NOTHING
            "#
        )
        .bind(&product.product_name)
        .bind(&product.product_img)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(product.ratings)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Current time according to the database
pub async fn database_now(pool: &PgPool) -> Result<DateTime<Utc>, sqlx::Error> {
    sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
        .fetch_one(pool)
        .await
}
