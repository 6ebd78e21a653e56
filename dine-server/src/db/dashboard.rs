//! Dashboard aggregate queries

use serde::Serialize;
use sqlx::SqlitePool;

use super::orders::OrderWithContext;

/// Headline stats for the admin dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    #[serde(rename = "todayOrders")]
    pub today_orders: i64,
    /// Whole currency units; cents are noise at a glance
    #[serde(rename = "todayRevenue")]
    pub today_revenue: i64,
    /// "occupied/total", preformatted for the header widget
    #[serde(rename = "occupiedTables")]
    pub occupied_tables: String,
    /// Mean minutes from order creation to ready/served today
    #[serde(rename = "avgWaitTime")]
    pub avg_wait_time: i64,
}

pub async fn stats(pool: &SqlitePool) -> Result<DashboardStats, sqlx::Error> {
    let (today_orders,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM orders WHERE DATE(created_at) = DATE('now')")
            .fetch_one(pool)
            .await?;

    let (revenue,): (f64,) = sqlx::query_as(
        "SELECT COALESCE(SUM(total_amount), 0.0)
         FROM orders
         WHERE DATE(created_at) = DATE('now') AND status != 'cancelled'",
    )
    .fetch_one(pool)
    .await?;

    let (occupied,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM tables WHERE status = 'occupied'")
            .fetch_one(pool)
            .await?;
    let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tables")
        .fetch_one(pool)
        .await?;

    let (avg_wait,): (Option<f64>,) = sqlx::query_as(
        "SELECT AVG((julianday(updated_at) - julianday(created_at)) * 1440.0)
         FROM orders
         WHERE DATE(created_at) = DATE('now') AND status IN ('ready', 'served')",
    )
    .fetch_one(pool)
    .await?;

    // A zero average means nothing measurable yet; show the 15 min default
    let avg_wait = match avg_wait {
        Some(minutes) if minutes != 0.0 => minutes,
        _ => 15.0,
    };

    Ok(DashboardStats {
        today_orders,
        today_revenue: shared::money::round_whole(revenue),
        occupied_tables: format!("{occupied}/{total}"),
        avg_wait_time: shared::money::round_whole(avg_wait),
    })
}

/// Every order of the UTC day, newest first, for the history panel
pub async fn orders_today(pool: &SqlitePool) -> Result<Vec<OrderWithContext>, sqlx::Error> {
    sqlx::query_as(
        "SELECT o.*, t.table_number, COUNT(oi.id) AS item_count
         FROM orders o
         JOIN tables t ON o.table_id = t.id
         LEFT JOIN order_items oi ON o.id = oi.order_id
         WHERE DATE(o.created_at) = DATE('now')
         GROUP BY o.id
         ORDER BY o.created_at DESC",
    )
    .fetch_all(pool)
    .await
}

/// Revenue for one calendar day
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RevenueRow {
    pub date: String,
    pub order_count: i64,
    pub total_revenue: f64,
}

/// Per-day revenue of non-cancelled orders over the given window:
/// "today" (single day), "week" (7 days) or "month" (30 days).
pub async fn revenue_by_period(
    pool: &SqlitePool,
    period: &str,
) -> Result<Vec<RevenueRow>, sqlx::Error> {
    let date_condition = match period {
        "week" => "DATE(created_at) >= DATE('now', '-7 day')",
        "month" => "DATE(created_at) >= DATE('now', '-30 day')",
        _ => "DATE(created_at) = DATE('now')",
    };

    let sql = format!(
        "SELECT DATE(created_at) AS date,
                COUNT(*) AS order_count,
                SUM(total_amount) AS total_revenue
         FROM orders
         WHERE {date_condition} AND status != 'cancelled'
         GROUP BY DATE(created_at)
         ORDER BY date DESC"
    );

    sqlx::query_as(&sql).fetch_all(pool).await
}

/// Most-ordered menu items across the last 7 days
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PopularItem {
    pub id: i64,
    pub name_en: String,
    pub name_th: String,
    pub icon: String,
    pub category: String,
    pub order_count: i64,
    pub total_quantity: i64,
    pub total_revenue: f64,
}

pub async fn popular_items(pool: &SqlitePool) -> Result<Vec<PopularItem>, sqlx::Error> {
    sqlx::query_as(
        "SELECT m.id, m.name_en, m.name_th, m.icon, m.category,
                COUNT(oi.id) AS order_count,
                SUM(oi.quantity) AS total_quantity,
                SUM(oi.final_price * oi.quantity) AS total_revenue
         FROM order_items oi
         JOIN menu_items m ON oi.menu_item_id = m.id
         JOIN orders o ON oi.order_id = o.id
         WHERE DATE(o.created_at) >= DATE('now', '-7 day')
         GROUP BY m.id
         ORDER BY order_count DESC
         LIMIT 10",
    )
    .fetch_all(pool)
    .await
}
