//! Dashboard reporting routes
//!
//! Read-only aggregates; all bucketing is by UTC calendar day.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use shared::error::ApiResponse;

use crate::db;
use crate::db::dashboard::{DashboardStats, PopularItem, RevenueRow};
use crate::db::orders::OrderWithContext;
use crate::error::ServiceResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard/stats", get(stats))
        .route("/api/dashboard/orders/today", get(orders_today))
        .route("/api/dashboard/revenue/{period}", get(revenue))
        .route("/api/dashboard/popular-items", get(popular_items))
}

/// GET /api/dashboard/stats - the four headline numbers
pub async fn stats(State(state): State<AppState>) -> ServiceResult<ApiResponse<DashboardStats>> {
    let stats = db::dashboard::stats(&state.pool).await?;
    Ok(ApiResponse::success(stats))
}

/// GET /api/dashboard/orders/today - today's full order list, newest first
pub async fn orders_today(
    State(state): State<AppState>,
) -> ServiceResult<ApiResponse<Vec<OrderWithContext>>> {
    let orders = db::dashboard::orders_today(&state.pool).await?;
    Ok(ApiResponse::success(orders))
}

/// GET /api/dashboard/revenue/{period} - per-day revenue; period is
/// today, week or month (anything else falls back to today)
pub async fn revenue(
    State(state): State<AppState>,
    Path(period): Path<String>,
) -> ServiceResult<ApiResponse<Vec<RevenueRow>>> {
    let rows = db::dashboard::revenue_by_period(&state.pool, &period).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /api/dashboard/popular-items - top sellers of the last 7 days
pub async fn popular_items(
    State(state): State<AppState>,
) -> ServiceResult<ApiResponse<Vec<PopularItem>>> {
    let items = db::dashboard::popular_items(&state.pool).await?;
    Ok(ApiResponse::success(items))
}
