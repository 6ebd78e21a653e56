//! HTTP API routes
//!
//! One module per area, each exposing a `router()`:
//!
//! - [`auth`] - admin login and profile
//! - [`tables`] - table listing, QR scan, reset, status
//! - [`sessions`] - party setup and checkout
//! - [`menu`] - catalog reads and admin writes
//! - [`orders`] - cart submission and the kitchen queue
//! - [`dashboard`] - aggregate reporting reads
//! - [`ws`] - realtime room subscriptions
//!
//! Handlers return `Result<ApiResponse<T>, ServiceError>`: business errors
//! carry their own HTTP status, database errors are logged and surfaced as
//! a 500 envelope.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod menu;
pub mod orders;
pub mod sessions;
pub mod tables;
pub mod ws;

use axum::Router;
use axum::routing::get;
use shared::error::{ApiResponse, AppError};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with middleware and state applied
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(auth::router(state.clone()))
        .merge(tables::router())
        .merge(sessions::router())
        .merge(menu::router())
        .merge(orders::router())
        .merge(dashboard::router())
        .route("/api/health", get(health::health_check))
        .route("/ws", get(ws::ws_handler))
        .fallback(api_not_found)
        // Admin panel and customer pages are served from other origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 404 envelope for unmatched routes
async fn api_not_found() -> (http::StatusCode, axum::Json<ApiResponse<()>>) {
    let err = AppError::with_message(shared::ErrorCode::NotFound, "API endpoint not found");
    (http::StatusCode::NOT_FOUND, axum::Json(ApiResponse::error(&err)))
}
