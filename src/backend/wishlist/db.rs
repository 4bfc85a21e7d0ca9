//! Database operations for wishlists

use sqlx::PgPool;

use crate::backend::catalog::db::product_from_row;
use crate::shared::commerce::Product;

/// Flip a product's wishlist membership for a session
///
/// Returns the new state: `true` when the product is now in the wishlist.
/// Fails with a foreign key violation when the product does not exist.
///
/// Toggles of the same (session, product) pair are serialized by a
/// transaction-scoped advisory lock, so two concurrent toggles always cancel
/// out.
pub async fn toggle(pool: &PgPool, session_id: &str, product_id: i32) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1), $2)")
        .bind(session_id)
        .bind(product_id)
        .execute(&mut *tx)
        .await?;

    let removed = sqlx::query(
        "DELETE FROM wishlist_items WHERE session_id = $1 AND product_id = $2",
    )
    .bind(session_id)
    .bind(product_id)
    .execute(&mut *tx)
    .await?
    .rows_affected();

    if removed == 0 {
        sqlx::query(
            r#"
            INSERT INTO wishlist_items (session_id, product_id)
            VALUES ($1, $2)
            ON CONFLICT (session_id, product_id) DO NOTHING
            "#
        )
        .bind(session_id)
        .bind(product_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(removed == 0)
}

/// Products in a session's wishlist, most recently added first
pub async fn list(pool: &PgPool, session_id: &str) -> Result<Vec<Product>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.product_id, p.product_name, p.product_img, p.description, p.price_cents, p.ratings,
               EXISTS (SELECT 1 FROM cart_items c
                       WHERE c.product_id = p.product_id AND c.session_id = w.session_id) AS is_added,
               TRUE AS is_favourite
        FROM wishlist_items w
        JOIN products p ON p.product_id = w.product_id
        WHERE w.session_id = $1
        ORDER BY w.added_at DESC, p.product_id
        "#
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(product_from_row).collect())
}
