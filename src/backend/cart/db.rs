//! Database operations for carts
//!
//! Quantity bounds are enforced in SQL as well as by the table's CHECK
//! constraint: additions cap at [`MAX_QUANTITY_PER_ITEM`] and decrements
//! floor at 1.

use sqlx::{postgres::PgRow, PgPool, Row};

use crate::shared::commerce::{CartLine, MAX_QUANTITY_PER_ITEM};

fn cart_line_from_row(row: &PgRow) -> CartLine {
    CartLine {
        item_id: row.get("item_id"),
        session_id: row.get("session_id"),
        product_id: row.get("product_id"),
        product_name: row.get("product_name"),
        product_img: row.get("product_img"),
        price_cents: row.get("price_cents"),
        quantity: row.get("quantity"),
    }
}

/// Add `quantity` units of a product to a session's cart
///
/// An existing line for the same product is increased instead of
/// duplicated. Fails with a foreign key violation when the product does not
/// exist.
pub async fn add_item(
    pool: &PgPool,
    session_id: &str,
    product_id: i32,
    quantity: i32,
) -> Result<CartLine, sqlx::Error> {
    let row = sqlx::query(
        r#"
        WITH upserted AS (
            INSERT INTO cart_items (session_id, product_id, quantity)
            VALUES ($1, $2, $3)
            ON CONFLICT (session_id, product_id)
            DO UPDATE SET quantity = LEAST(cart_items.quantity + EXCLUDED.quantity, $4)
            RETURNING item_id, session_id, product_id, quantity
        )
        SELECT u.item_id, u.session_id, u.product_id, p.product_name, p.product_img, p.price_cents, u.quantity
        FROM upserted u
        JOIN products p ON p.product_id = u.product_id
        "#
    )
    .bind(session_id)
    .bind(product_id)
    .bind(quantity)
    .bind(MAX_QUANTITY_PER_ITEM)
    .fetch_one(pool)
    .await?;

    Ok(cart_line_from_row(&row))
}

/// All lines of a session's cart, oldest first
pub async fn list_items(pool: &PgPool, session_id: &str) -> Result<Vec<CartLine>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.item_id, c.session_id, c.product_id, p.product_name, p.product_img, p.price_cents, c.quantity
        FROM cart_items c
        JOIN products p ON p.product_id = c.product_id
        WHERE c.session_id = $1
        ORDER BY c.item_id
        "#
    )
    .bind(session_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(cart_line_from_row).collect())
}

/// Delete a cart line; returns false when no such line exists
pub async fn remove_item(pool: &PgPool, item_id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cart_items WHERE item_id = $1")
        .bind(item_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Change a line's quantity by `delta`, clamped to 1..=MAX_QUANTITY_PER_ITEM
///
/// Returns `None` when no such line exists.
pub async fn adjust_quantity(
    pool: &PgPool,
    item_id: i32,
    delta: i32,
) -> Result<Option<CartLine>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        WITH updated AS (
            UPDATE cart_items
            SET quantity = LEAST(GREATEST(quantity + $2, 1), $3)
            WHERE item_id = $1
            RETURNING item_id, session_id, product_id, quantity
        )
        SELECT u.item_id, u.session_id, u.product_id, p.product_name, p.product_img, p.price_cents, u.quantity
        FROM updated u
        JOIN products p ON p.product_id = u.product_id
        "#
    )
    .bind(item_id)
    .bind(delta)
    .bind(MAX_QUANTITY_PER_ITEM)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(cart_line_from_row))
}
