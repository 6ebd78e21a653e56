//! Session and avatar queries

use shared::models::{Avatar, AvatarCreate, Session};
use shared::util::snowflake_id;
use sqlx::SqlitePool;

pub async fn create(
    pool: &SqlitePool,
    id: i64,
    table_id: i64,
    people_count: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO sessions (id, table_id, people_count) VALUES (?, ?, ?)")
        .bind(id)
        .bind(table_id)
        .bind(people_count)
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert one party member, filling defaults for anything the client
/// left out (empty strings count as left out).
pub async fn insert_avatar(
    pool: &SqlitePool,
    session_id: i64,
    index: i32,
    avatar: &AvatarCreate,
) -> Result<(), sqlx::Error> {
    let animal = avatar
        .animal
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("🧑");
    let nickname = avatar
        .nickname
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("Person {}", index + 1));
    let is_ordering = avatar.is_ordering.unwrap_or(true);
    let payment_method = avatar
        .payment_method
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("cash");

    sqlx::query(
        "INSERT INTO avatars (id, session_id, avatar_index, animal_emoji, nickname, is_ordering, payment_method)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(snowflake_id())
    .bind(session_id)
    .bind(index)
    .bind(animal)
    .bind(nickname)
    .bind(is_ordering)
    .bind(payment_method)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM sessions WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Latest active session for a table, if any
pub async fn find_active_by_table(
    pool: &SqlitePool,
    table_id: i64,
) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM sessions WHERE table_id = ? AND status = 'active'
         ORDER BY started_at DESC LIMIT 1",
    )
    .bind(table_id)
    .fetch_optional(pool)
    .await
}

pub async fn avatars_for(pool: &SqlitePool, session_id: i64) -> Result<Vec<Avatar>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM avatars WHERE session_id = ? ORDER BY avatar_index")
        .bind(session_id)
        .fetch_all(pool)
        .await
}

/// Mark one session completed. Returns affected row count.
pub async fn complete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE sessions SET status = 'completed', ended_at = CURRENT_TIMESTAMP WHERE id = ?",
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Complete every active session on a table (table reset path)
pub async fn complete_active_for_table(
    pool: &SqlitePool,
    table_id: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE sessions SET status = 'completed', ended_at = CURRENT_TIMESTAMP
         WHERE table_id = ? AND status = 'active'",
    )
    .bind(table_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
