//! Dining table routes
//!
//! Table state changes fan out to the admin room so staff dashboards
//! repaint without polling.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use shared::error::{ApiResponse, AppError};
use shared::events::ServerEvent;
use shared::models::{DiningTable, TableStatus};

use crate::db;
use crate::error::ServiceResult;
use crate::live::ADMIN_ROOM;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tables", get(list))
        .route("/api/tables/all", get(list_all))
        .route("/api/tables/{id}", get(get_by_id))
        .route("/api/tables/scan/{table_number}", post(scan))
        .route("/api/tables/reset/{table_id}", post(reset))
        .route("/api/tables/{table_id}/status", put(set_status))
}

/// GET /api/tables - all tables ordered by display number
pub async fn list(State(state): State<AppState>) -> ServiceResult<ApiResponse<Vec<DiningTable>>> {
    let tables = db::tables::list(&state.pool).await?;
    Ok(ApiResponse::success(tables))
}

/// GET /api/tables/all - legacy unordered listing
pub async fn list_all(
    State(state): State<AppState>,
) -> ServiceResult<ApiResponse<Vec<DiningTable>>> {
    let tables = db::tables::list_all(&state.pool).await?;
    Ok(ApiResponse::success(tables))
}

/// GET /api/tables/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<ApiResponse<DiningTable>> {
    let table = db::tables::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Table"))?;
    Ok(ApiResponse::success(table))
}

/// Scan result; what the customer flow needs to start a session
#[derive(Debug, Serialize)]
pub struct ScanResult {
    #[serde(rename = "tableId")]
    pub table_id: i64,
    #[serde(rename = "tableNumber")]
    pub table_number: i64,
    pub capacity: i32,
}

/// POST /api/tables/scan/{table_number} - occupy a table by its QR code
pub async fn scan(
    State(state): State<AppState>,
    Path(table_number): Path<i64>,
) -> ServiceResult<ApiResponse<ScanResult>> {
    let table = db::tables::find_by_number(&state.pool, table_number)
        .await?
        .ok_or_else(|| AppError::not_found("Table"))?;

    db::tables::set_status(&state.pool, table.id, TableStatus::Occupied).await?;

    state.hub.publish(
        ADMIN_ROOM,
        ServerEvent::TableScanned {
            table_id: table.id,
            table_number: table.table_number,
            status: TableStatus::Occupied,
        },
    );

    Ok(ApiResponse::success(ScanResult {
        table_id: table.id,
        table_number: table.table_number,
        capacity: table.capacity,
    }))
}

/// POST /api/tables/reset/{table_id} - free the table and complete its
/// active sessions. Two separate statements; a failure between them can
/// leave a free table with an active session.
pub async fn reset(
    State(state): State<AppState>,
    Path(table_id): Path<i64>,
) -> ServiceResult<ApiResponse<()>> {
    db::tables::set_status(&state.pool, table_id, TableStatus::Free).await?;
    db::sessions::complete_active_for_table(&state.pool, table_id).await?;

    state
        .hub
        .publish(ADMIN_ROOM, ServerEvent::TableReset { table_id });

    Ok(ApiResponse::message("Table reset successfully"))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: Option<String>,
}

/// PUT /api/tables/{table_id}/status - direct overwrite, no session
/// side effects
pub async fn set_status(
    State(state): State<AppState>,
    Path(table_id): Path<i64>,
    Json(body): Json<StatusBody>,
) -> ServiceResult<ApiResponse<()>> {
    let status = body
        .status
        .as_deref()
        .and_then(TableStatus::parse)
        .ok_or_else(|| AppError::validation("Invalid status"))?;

    db::tables::set_status(&state.pool, table_id, status).await?;

    state
        .hub
        .publish(ADMIN_ROOM, ServerEvent::TableStatusUpdated { table_id, status });

    Ok(ApiResponse::message("Table status updated"))
}
