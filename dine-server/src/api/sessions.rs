//! Dining session routes
//!
//! Party setup inserts the session, its avatars, and the table status
//! flip as sequential statements. Order creation is the only transaction
//! in the system; a crash mid-setup can leave a partial party.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use shared::error::{ApiResponse, AppError};
use shared::events::ServerEvent;
use shared::models::{Avatar, Session, SessionCreate, TableStatus};
use shared::util::snowflake_id;

use crate::db;
use crate::error::ServiceResult;
use crate::live::ADMIN_ROOM;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/sessions", post(create))
        .route("/api/sessions/{session_id}", get(get_by_id))
        .route("/api/sessions/table/{table_id}", get(get_by_table))
        .route("/api/sessions/{session_id}/end", post(end))
}

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    #[serde(rename = "sessionId")]
    pub session_id: i64,
    #[serde(rename = "tableId")]
    pub table_id: i64,
    #[serde(rename = "peopleCount")]
    pub people_count: i32,
}

/// POST /api/sessions - start a party at a table
///
/// There is deliberately no check for an existing active session on the
/// table; calling this twice stacks two active sessions (the frontend
/// prevents it, the API does not).
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<SessionCreate>,
) -> ServiceResult<ApiResponse<SessionCreated>> {
    let (Some(table_id), Some(people_count)) = (body.table_id, body.people_count) else {
        return Err(AppError::validation("Missing required fields").into());
    };
    if people_count <= 0 {
        return Err(AppError::validation("Missing required fields").into());
    }

    let session_id = snowflake_id();
    db::sessions::create(&state.pool, session_id, table_id, people_count).await?;

    // One row per submitted party member; the array may legitimately be
    // shorter than people_count (spectators who never order)
    for (index, avatar) in body.avatars.iter().enumerate() {
        db::sessions::insert_avatar(&state.pool, session_id, index as i32, avatar).await?;
    }

    db::tables::set_status(&state.pool, table_id, TableStatus::Occupied).await?;

    state.hub.publish(
        ADMIN_ROOM,
        ServerEvent::SessionCreated {
            session_id,
            table_id,
            people_count,
        },
    );

    Ok(ApiResponse::success(SessionCreated {
        session_id,
        table_id,
        people_count,
    }))
}

/// Session with its party, the shape both session reads return
#[derive(Debug, Serialize)]
pub struct SessionWithAvatars {
    #[serde(flatten)]
    pub session: Session,
    pub avatars: Vec<Avatar>,
}

/// GET /api/sessions/{session_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> ServiceResult<ApiResponse<SessionWithAvatars>> {
    let session = db::sessions::get(&state.pool, session_id)
        .await?
        .ok_or_else(|| AppError::not_found("Session"))?;
    let avatars = db::sessions::avatars_for(&state.pool, session_id).await?;
    Ok(ApiResponse::success(SessionWithAvatars { session, avatars }))
}

/// GET /api/sessions/table/{table_id} - latest active session for a table
pub async fn get_by_table(
    State(state): State<AppState>,
    Path(table_id): Path<i64>,
) -> ServiceResult<ApiResponse<SessionWithAvatars>> {
    let session = db::sessions::find_active_by_table(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::with_message(shared::ErrorCode::NotFound, "No active session found"))?;
    let avatars = db::sessions::avatars_for(&state.pool, session.id).await?;
    Ok(ApiResponse::success(SessionWithAvatars { session, avatars }))
}

/// POST /api/sessions/{session_id}/end - checkout; the table goes dirty,
/// not free, until staff reset it
pub async fn end(
    State(state): State<AppState>,
    Path(session_id): Path<i64>,
) -> ServiceResult<ApiResponse<()>> {
    let session = db::sessions::get(&state.pool, session_id)
        .await?
        .ok_or_else(|| AppError::not_found("Session"))?;

    db::sessions::complete(&state.pool, session_id).await?;
    db::tables::set_status(&state.pool, session.table_id, TableStatus::Dirty).await?;

    state.hub.publish(
        ADMIN_ROOM,
        ServerEvent::SessionEnded {
            session_id,
            table_id: session.table_id,
        },
    );

    Ok(ApiResponse::message("Session ended successfully"))
}
