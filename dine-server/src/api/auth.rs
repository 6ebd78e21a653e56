//! Admin authentication routes
//!
//! `/api/auth/login` verifies credentials against the stored argon2 hash
//! only — there is no fallback credential pair. `/api/auth/me` sits behind
//! the bearer-token middleware.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Extension, Json, Router, middleware};
use serde::Serialize;
use shared::error::{ApiResponse, AppError};
use shared::models::{AdminUserInfo, LoginRequest};
use std::time::Duration;

use crate::auth::{CurrentUser, require_auth, verify_password};
use crate::db;
use crate::error::{ServiceError, ServiceResult};
use crate::state::AppState;

/// Fixed delay on the credential path to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 300;

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/me", get(me))
        .layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/api/auth/login", post(login))
        .merge(protected)
}

/// Login response; token and admin ride at the top level next to the
/// envelope fields, which is what the admin panel expects.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub admin: AdminInfo,
}

#[derive(Debug, Serialize)]
pub struct AdminInfo {
    pub username: String,
    pub role: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ServiceResult<Json<LoginResponse>> {
    let (Some(username), Some(password)) = (req.username.as_deref(), req.password.as_deref())
    else {
        return Err(AppError::validation("Username and password required").into());
    };
    if username.is_empty() || password.is_empty() {
        return Err(AppError::validation("Username and password required").into());
    }

    let user = db::admin_users::find_by_username(&state.pool, username).await?;

    // Same delay whether the user exists or not
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unknown user and wrong password collapse into one answer
    let user = match user {
        Some(u) if verify_password(password, &u.password_hash) => u,
        _ => {
            tracing::warn!(username = %username, "Login failed");
            return Err(AppError::invalid_credentials().into());
        }
    };

    let token = state
        .jwt
        .generate_token(user.id, &user.username, &user.role)
        .map_err(|e| ServiceError::Db(e.into()))?;

    tracing::info!(username = %user.username, "Admin logged in");

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        admin: AdminInfo {
            username: user.username,
            role: user.role,
        },
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ServiceResult<ApiResponse<AdminUserInfo>> {
    let info = db::admin_users::get_info(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found("User"))?;
    Ok(ApiResponse::success(info))
}
