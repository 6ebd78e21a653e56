//! Health check endpoint
//!
//! Plain JSON, no envelope; load balancers and uptime probes read it.

use axum::Json;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
