//! Menu catalog routes
//!
//! Reads are public (the customer flow browses without auth); writes are
//! the admin panel's. Deleting is always a soft delete so past order
//! items keep their menu reference.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use shared::error::{ApiResponse, AppError};
use shared::events::ServerEvent;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use shared::util::snowflake_id;

use crate::db;
use crate::error::ServiceResult;
use crate::live::ADMIN_ROOM;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/menu", get(list).post(create))
        .route("/api/menu/{id}", get(get_by_id).put(update).delete(delete))
        .route("/api/menu/category/{category}", get(list_category))
}

/// GET /api/menu - every item, including unavailable ones (admin view)
pub async fn list(State(state): State<AppState>) -> ServiceResult<ApiResponse<Vec<MenuItem>>> {
    let items = db::menu::list_all(&state.pool).await?;
    Ok(ApiResponse::success(items))
}

/// GET /api/menu/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<ApiResponse<MenuItem>> {
    let item = db::menu::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Menu item"))?;
    Ok(ApiResponse::success(item))
}

/// GET /api/menu/category/{category} - available items only
pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ServiceResult<ApiResponse<Vec<MenuItem>>> {
    let items = db::menu::list_category(&state.pool, &category).await?;
    Ok(ApiResponse::success(items))
}

#[derive(Debug, Serialize)]
pub struct CreatedItem {
    pub id: i64,
}

/// POST /api/menu
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<MenuItemCreate>,
) -> ServiceResult<ApiResponse<CreatedItem>> {
    if !body.is_valid() {
        return Err(AppError::validation("Missing required fields").into());
    }

    let id = snowflake_id();
    db::menu::create(&state.pool, id, &body).await?;

    state
        .hub
        .publish(ADMIN_ROOM, ServerEvent::MenuItemCreated { item_id: id });

    Ok(ApiResponse::success(CreatedItem { id }))
}

/// PUT /api/menu/{id} - partial patch; absent fields stay untouched
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<MenuItemUpdate>,
) -> ServiceResult<ApiResponse<()>> {
    if !body.has_changes() {
        return Err(AppError::validation("No fields to update").into());
    }

    db::menu::update(&state.pool, id, &body).await?;

    state
        .hub
        .publish(ADMIN_ROOM, ServerEvent::MenuItemUpdated { item_id: id });

    Ok(ApiResponse::message("Menu item updated"))
}

/// DELETE /api/menu/{id} - soft delete, the row survives
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<ApiResponse<()>> {
    db::menu::soft_delete(&state.pool, id).await?;

    state
        .hub
        .publish(ADMIN_ROOM, ServerEvent::MenuItemDeleted { item_id: id });

    Ok(ApiResponse::message("Menu item deleted"))
}
