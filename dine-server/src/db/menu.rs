//! Menu item queries

use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<MenuItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM menu_items ORDER BY category, name_en")
        .fetch_all(pool)
        .await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<MenuItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM menu_items WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Available items in one category, for the customer-facing menu
pub async fn list_category(
    pool: &SqlitePool,
    category: &str,
) -> Result<Vec<MenuItem>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM menu_items WHERE category = ? AND is_available = 1 ORDER BY name_en",
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Insert a new item. Callers validate required fields first; optional
/// columns fall back to their defaults here.
pub async fn create(pool: &SqlitePool, id: i64, data: &MenuItemCreate) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO menu_items
            (id, name_en, name_th, description_en, description_th, price, category, icon,
             is_vegetarian, is_spicy, is_popular)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.name_en)
    .bind(&data.name_th)
    .bind(data.description_en.as_deref().unwrap_or(""))
    .bind(data.description_th.as_deref().unwrap_or(""))
    .bind(data.price)
    .bind(&data.category)
    .bind(data.icon.as_deref().unwrap_or("🍽️"))
    .bind(data.is_vegetarian.unwrap_or(false))
    .bind(data.is_spicy.unwrap_or(false))
    .bind(data.is_popular.unwrap_or(false))
    .execute(pool)
    .await?;
    Ok(())
}

/// Partial update; absent fields keep their current value.
/// Returns affected row count.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: &MenuItemUpdate,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE menu_items SET
            name_en = COALESCE(?, name_en),
            name_th = COALESCE(?, name_th),
            description_en = COALESCE(?, description_en),
            description_th = COALESCE(?, description_th),
            price = COALESCE(?, price),
            category = COALESCE(?, category),
            icon = COALESCE(?, icon),
            is_vegetarian = COALESCE(?, is_vegetarian),
            is_spicy = COALESCE(?, is_spicy),
            is_popular = COALESCE(?, is_popular),
            is_available = COALESCE(?, is_available)
         WHERE id = ?",
    )
    .bind(&data.name_en)
    .bind(&data.name_th)
    .bind(&data.description_en)
    .bind(&data.description_th)
    .bind(data.price)
    .bind(&data.category)
    .bind(&data.icon)
    .bind(data.is_vegetarian)
    .bind(data.is_spicy)
    .bind(data.is_popular)
    .bind(data.is_available)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

/// Soft delete: hide the item, keep the row for order history
pub async fn soft_delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE menu_items SET is_available = 0 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
