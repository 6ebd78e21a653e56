//! Service-layer error bridge
//!
//! Handlers return [`ServiceResult`] and use `?` on both sqlx calls and
//! business checks. Business errors ([`AppError`]) pass through to the
//! envelope with their own HTTP status; infrastructure errors are logged
//! here and collapse into a bare 500 so no database detail reaches the
//! client.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Infrastructure failure (sqlx, token signing); detail stays server-side
    #[error("infrastructure error: {0}")]
    Db(#[source] BoxError),

    /// Business-rule failure, already carrying its code and message
    #[error(transparent)]
    App(#[from] AppError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        ServiceError::Db(Box::new(e))
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl ServiceError {
    /// Collapse into the client-facing error, logging anything hidden
    fn into_app_error(self) -> AppError {
        match self {
            ServiceError::App(err) => err,
            ServiceError::Db(err) => {
                tracing::error!(error = %err, "Service infrastructure error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        e.into_app_error()
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        self.into_app_error().into_response()
    }
}
