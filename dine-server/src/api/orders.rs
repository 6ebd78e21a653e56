//! Order routes — cart submission and the kitchen queue
//!
//! `create` is the one write wrapped in a transaction: the order row and
//! every item row land together or not at all. Status changes fan out to
//! the admin room and the ordering table's own room.

use axum::extract::{Path, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use shared::error::{ApiResponse, AppError};
use shared::events::ServerEvent;
use shared::models::{OrderCreate, OrderEdit, OrderStatus};
use shared::util::snowflake_id;

use crate::db;
use crate::db::orders::{OrderDetail, OrderItemDetail, OrderWithContext, QueueEntry};
use crate::error::ServiceResult;
use crate::live::{ADMIN_ROOM, table_room};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", post(create))
        .route("/api/orders/queue/all", get(queue))
        .route("/api/orders/table/{table_id}", get(list_by_table))
        .route("/api/orders/{id}", get(get_by_id).put(edit).delete(delete))
        .route("/api/orders/{id}/status", put(update_status))
}

#[derive(Debug, Serialize)]
pub struct OrderCreated {
    #[serde(rename = "orderId")]
    pub order_id: i64,
    #[serde(rename = "queueNumber")]
    pub queue_number: String,
    #[serde(rename = "tableNumber")]
    pub table_number: i64,
}

/// POST /api/orders - submit a cart
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<OrderCreate>,
) -> ServiceResult<ApiResponse<OrderCreated>> {
    let (Some(session_id), Some(table_id)) = (body.session_id, body.table_id) else {
        return Err(AppError::validation("Missing required fields").into());
    };
    if body.items.is_empty() {
        return Err(AppError::validation("Missing required fields").into());
    }

    let queue_number = db::orders::generate_queue_number(&state.pool)
        .await?
        .ok_or_else(|| AppError::internal("Queue number space exhausted for today"))?;

    let order_id = snowflake_id();
    db::orders::create_order(&state.pool, order_id, session_id, table_id, &queue_number, &body)
        .await?;

    // Display number for the admin event; the order is already committed,
    // so a failed lookup here must not fail the request
    let table_number = db::tables::get(&state.pool, table_id)
        .await?
        .map(|t| t.table_number)
        .unwrap_or(table_id);

    state.hub.publish(
        ADMIN_ROOM,
        ServerEvent::NewOrder {
            order_id,
            queue_number: queue_number.clone(),
            table_number,
            total_amount: body.total_amount,
            item_count: body.items.len() as i64,
        },
    );

    Ok(ApiResponse::success(OrderCreated {
        order_id,
        queue_number,
        table_number,
    }))
}

/// Full order payload: order fields flattened, items nested
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: OrderDetail,
    pub items: Vec<OrderItemDetail>,
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<ApiResponse<OrderResponse>> {
    let order = db::orders::get_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Order"))?;
    let items = db::orders::items_detail(&state.pool, id).await?;
    Ok(ApiResponse::success(OrderResponse { order, items }))
}

/// GET /api/orders/queue/all - per-table snapshot for the kitchen board
pub async fn queue(State(state): State<AppState>) -> ServiceResult<ApiResponse<Vec<QueueEntry>>> {
    let entries = db::orders::queue_snapshot(&state.pool).await?;
    Ok(ApiResponse::success(entries))
}

/// GET /api/orders/table/{table_id} - today's orders for one table
pub async fn list_by_table(
    State(state): State<AppState>,
    Path(table_id): Path<i64>,
) -> ServiceResult<ApiResponse<Vec<OrderWithContext>>> {
    let orders = db::orders::list_for_table_today(&state.pool, table_id).await?;
    Ok(ApiResponse::success(orders))
}

#[derive(Debug, serde::Deserialize)]
pub struct StatusBody {
    pub status: Option<String>,
}

/// PUT /api/orders/{id}/status - move an order through the machine
///
/// Any of the six statuses may follow any other; the kitchen sometimes
/// walks orders backwards after a mistake.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<StatusBody>,
) -> ServiceResult<ApiResponse<()>> {
    let status = body
        .status
        .as_deref()
        .and_then(OrderStatus::parse)
        .ok_or_else(|| AppError::validation("Invalid status"))?;

    let order = db::orders::get(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Order"))?;

    db::orders::set_status(&state.pool, id, status).await?;

    let table_number = db::tables::get(&state.pool, order.table_id)
        .await?
        .map(|t| t.table_number)
        .unwrap_or(order.table_id);

    let event = ServerEvent::OrderStatusUpdated {
        order_id: id,
        queue_number: order.queue_number,
        status,
    };
    // Staff board and the ordering party both watch this
    state.hub.publish(ADMIN_ROOM, event.clone());
    state.hub.publish(&table_room(table_number), event);

    Ok(ApiResponse::message("Order status updated"))
}

/// PUT /api/orders/{id} - admin overwrite of the display fields
///
/// The re-parent by table number is a second statement on purpose; the
/// field update stands even when the table number is unknown.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<OrderEdit>,
) -> ServiceResult<ApiResponse<()>> {
    let status = OrderStatus::parse(&body.status)
        .ok_or_else(|| AppError::validation("Invalid status"))?;

    db::orders::edit(&state.pool, id, &body.queue_number, status, body.total_amount).await?;

    if let Some(table_number) = body.table_number
        && let Some(table) = db::tables::find_by_number(&state.pool, table_number).await?
    {
        db::orders::reparent(&state.pool, id, table.id).await?;
    }

    Ok(ApiResponse::message("Order updated"))
}

/// DELETE /api/orders/{id} - hard delete; items cascade with the order
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<ApiResponse<()>> {
    let affected = db::orders::delete(&state.pool, id).await?;
    if affected == 0 {
        return Err(AppError::not_found("Order").into());
    }
    Ok(ApiResponse::message("Order deleted"))
}
