//! Order and queue-code queries
//!
//! Order + item creation is the ONE multi-statement transaction in the
//! system; everything else runs as independent statements.

use serde::Serialize;
use shared::models::{Order, OrderCreate, OrderStatus, TableStatus};
use shared::util::snowflake_id;
use sqlx::SqlitePool;
use std::collections::HashMap;

/// Queue codes span 'A00'..'Z99' minus the 00 suffix, 2574 combinations
/// per day. Sampling past this many attempts means the day's space is
/// effectively exhausted.
const MAX_QUEUE_CODE_ATTEMPTS: u32 = 2600;

/// One random code: uppercase letter + zero-padded 01..=99
fn random_queue_code(rng: &mut impl rand::Rng) -> String {
    let letter = (b'A' + rng.gen_range(0..26)) as char;
    let number: u32 = rng.gen_range(1..=99);
    format!("{letter}{number:02}")
}

/// Draw queue codes until one is unused among today's orders.
/// Returns None when the attempt cap is hit.
pub async fn generate_queue_number(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    for _ in 0..MAX_QUEUE_CODE_ATTEMPTS {
        let code = random_queue_code(&mut rand::thread_rng());
        let taken: Option<(i64,)> = sqlx::query_as(
            "SELECT id FROM orders WHERE queue_number = ? AND DATE(created_at) = DATE('now')",
        )
        .bind(&code)
        .fetch_optional(pool)
        .await?;
        if taken.is_none() {
            return Ok(Some(code));
        }
    }
    Ok(None)
}

/// Insert the order row and all item rows in one transaction.
/// Any failure (including FK violations on avatar/menu ids) rolls the
/// whole order back.
pub async fn create_order(
    pool: &SqlitePool,
    id: i64,
    session_id: i64,
    table_id: i64,
    queue_number: &str,
    data: &OrderCreate,
) -> Result<(), sqlx::Error> {
    let payment_mode = data
        .payment_mode
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("split");

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO orders (id, session_id, table_id, queue_number, total_amount, payment_mode)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(session_id)
    .bind(table_id)
    .bind(queue_number)
    .bind(data.total_amount)
    .bind(payment_mode)
    .execute(&mut *tx)
    .await?;

    for item in &data.items {
        let custom = item.customizations.as_ref();
        sqlx::query(
            "INSERT INTO order_items
                (id, order_id, avatar_id, menu_item_id, quantity, base_price, final_price,
                 spicy_level, protein_choice, special_notes)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(snowflake_id())
        .bind(id)
        .bind(item.avatar_id)
        .bind(item.item_id)
        .bind(item.quantity)
        .bind(item.base_price)
        .bind(item.final_price)
        .bind(custom.and_then(|c| c.spicy_level).unwrap_or(0))
        .bind(
            custom
                .and_then(|c| c.protein.as_deref())
                .filter(|s| !s.is_empty())
                .unwrap_or("Original"),
        )
        .bind(custom.and_then(|c| c.notes.as_deref()))
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Order joined with table and session context (single-order fetch)
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderDetail {
    pub id: i64,
    pub session_id: i64,
    pub table_id: i64,
    pub queue_number: String,
    pub total_amount: f64,
    pub payment_mode: String,
    pub status: OrderStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub table_number: i64,
    pub people_count: i32,
}

/// Order item joined with menu and avatar display fields
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderItemDetail {
    pub id: i64,
    pub order_id: i64,
    pub avatar_id: i64,
    pub menu_item_id: i64,
    pub quantity: i32,
    pub base_price: f64,
    pub final_price: f64,
    pub spicy_level: i32,
    pub protein_choice: String,
    pub special_notes: Option<String>,
    pub name_en: String,
    pub name_th: String,
    pub icon: String,
    pub nickname: String,
    pub animal_emoji: String,
}

pub async fn get_detail(pool: &SqlitePool, id: i64) -> Result<Option<OrderDetail>, sqlx::Error> {
    sqlx::query_as(
        "SELECT o.*, t.table_number, s.people_count
         FROM orders o
         JOIN tables t ON o.table_id = t.id
         JOIN sessions s ON o.session_id = s.id
         WHERE o.id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn items_detail(
    pool: &SqlitePool,
    order_id: i64,
) -> Result<Vec<OrderItemDetail>, sqlx::Error> {
    sqlx::query_as(
        "SELECT oi.*, m.name_en, m.name_th, m.icon, a.nickname, a.animal_emoji
         FROM order_items oi
         JOIN menu_items m ON oi.menu_item_id = m.id
         JOIN avatars a ON oi.avatar_id = a.id
         WHERE oi.order_id = ?",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await
}

/// Order with its table number and aggregated item count
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct OrderWithContext {
    pub id: i64,
    pub session_id: i64,
    pub table_id: i64,
    pub queue_number: String,
    pub total_amount: f64,
    pub payment_mode: String,
    pub status: OrderStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub table_number: i64,
    pub item_count: i64,
}

/// One row of the kitchen queue: a table and its current order, if any
#[derive(Debug, Clone, Serialize)]
pub struct QueueEntry {
    pub table_id: i64,
    pub table_number: i64,
    pub status: TableStatus,
    pub capacity: i32,
    pub order: Option<OrderWithContext>,
}

/// Every table with its most recent qualifying order of today.
/// Qualifying = not yet served and not cancelled; when a table somehow
/// has several, the latest created wins.
pub async fn queue_snapshot(pool: &SqlitePool) -> Result<Vec<QueueEntry>, sqlx::Error> {
    let tables = super::tables::list(pool).await?;

    let orders: Vec<OrderWithContext> = sqlx::query_as(
        "SELECT o.*, t.table_number, COUNT(oi.id) AS item_count
         FROM orders o
         JOIN tables t ON o.table_id = t.id
         LEFT JOIN order_items oi ON o.id = oi.order_id
         WHERE o.status != 'served' AND o.status != 'cancelled'
           AND DATE(o.created_at) = DATE('now')
         GROUP BY o.id
         ORDER BY o.created_at ASC",
    )
    .fetch_all(pool)
    .await?;

    // Ascending creation order, so later entries overwrite earlier ones
    let mut by_table: HashMap<i64, OrderWithContext> = HashMap::new();
    for order in orders {
        by_table.insert(order.table_id, order);
    }

    Ok(tables
        .into_iter()
        .map(|table| QueueEntry {
            order: by_table.remove(&table.id),
            table_id: table.id,
            table_number: table.table_number,
            status: table.status,
            capacity: table.capacity,
        })
        .collect())
}

/// Today's orders for one table, newest first
pub async fn list_for_table_today(
    pool: &SqlitePool,
    table_id: i64,
) -> Result<Vec<OrderWithContext>, sqlx::Error> {
    sqlx::query_as(
        "SELECT o.*, t.table_number, COUNT(oi.id) AS item_count
         FROM orders o
         JOIN tables t ON o.table_id = t.id
         LEFT JOIN order_items oi ON o.id = oi.order_id
         WHERE o.table_id = ? AND DATE(o.created_at) = DATE('now')
         GROUP BY o.id
         ORDER BY o.created_at DESC",
    )
    .bind(table_id)
    .fetch_all(pool)
    .await
}

/// Bare order row, no joins
pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM orders WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: OrderStatus,
) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE orders SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

/// Administrative overwrite of the display fields. Zero rows affected
/// is not an error; callers decide.
pub async fn edit(
    pool: &SqlitePool,
    id: i64,
    queue_number: &str,
    status: OrderStatus,
    total_amount: f64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE orders SET queue_number = ?, status = ?, total_amount = ?,
                updated_at = CURRENT_TIMESTAMP
         WHERE id = ?",
    )
    .bind(queue_number)
    .bind(status)
    .bind(total_amount)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Move an order to another table. Runs as its own statement, separate
/// from `edit` on purpose.
pub async fn reparent(pool: &SqlitePool, id: i64, table_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE orders SET table_id = ? WHERE id = ?")
        .bind(table_id)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Hard delete; item rows go with the order via FK cascade
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
