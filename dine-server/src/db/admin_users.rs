//! Admin user queries

use shared::models::{AdminUser, AdminUserInfo};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

pub async fn find_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<AdminUser>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM admin_users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn get_info(pool: &SqlitePool, id: i64) -> Result<Option<AdminUserInfo>, sqlx::Error> {
    sqlx::query_as("SELECT id, username, role, created_at FROM admin_users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM admin_users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    role: &str,
) -> Result<i64, sqlx::Error> {
    let id = snowflake_id();
    sqlx::query("INSERT INTO admin_users (id, username, password_hash, role) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .execute(pool)
        .await?;
    Ok(id)
}
