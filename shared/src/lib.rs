//! Shared types for the dine-server workspace
//!
//! Domain models, status enums, the error/response framework, the realtime
//! wire protocol, and small id/time/money utilities. Database derives are
//! feature-gated behind `db` so non-server consumers stay sqlx-free.

pub mod error;
pub mod events;
pub mod models;
pub mod money;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
