//! Unified error handling for the dine-server workspace
//!
//! Every API failure is classified by an [`ErrorCode`], carried as an
//! [`AppError`], and serialized through the [`ApiResponse`] envelope:
//!
//! ```json
//! { "success": false, "message": "Order not found" }
//! ```
//!
//! Success responses use the same envelope with `success: true` and an
//! optional `data` payload.

mod codes;
mod types;

pub use codes::{ErrorCategory, ErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
