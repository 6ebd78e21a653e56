//! Dining table queries

use shared::models::{DiningTable, TableStatus};
use sqlx::SqlitePool;

pub async fn list(pool: &SqlitePool) -> Result<Vec<DiningTable>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tables ORDER BY table_number")
        .fetch_all(pool)
        .await
}

/// Unordered listing, kept for the legacy `/tables/all` route
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<DiningTable>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tables").fetch_all(pool).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<DiningTable>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tables WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_number(
    pool: &SqlitePool,
    table_number: i64,
) -> Result<Option<DiningTable>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM tables WHERE table_number = ?")
        .bind(table_number)
        .fetch_optional(pool)
        .await
}

/// Overwrite a table's status. Returns affected row count; updating an
/// unknown id affects zero rows and is not an error here.
pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: TableStatus,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE tables SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
