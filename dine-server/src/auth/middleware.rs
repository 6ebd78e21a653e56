//! Authentication Middleware
//!
//! Extracts and validates the JWT from the Authorization header and
//! stores the CurrentUser in request extensions for downstream handlers.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::AppError;

use crate::auth::{CurrentUser, JwtService};
use crate::state::AppState;

/// Require authentication middleware
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = auth_header
        .and_then(JwtService::extract_from_header)
        .ok_or_else(|| AppError::unauthorized("No token provided"))?;

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            let id: i64 = claims
                .sub
                .parse()
                .map_err(|_| AppError::invalid_token("Invalid token"))?;
            req.extensions_mut().insert(CurrentUser {
                id,
                username: claims.username,
                role: claims.role,
            });
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Token validation failed");
            Err(AppError::invalid_token("Invalid token"))
        }
    }
}
