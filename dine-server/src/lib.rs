//! dine-server — restaurant table-ordering backend
//!
//! Customers scan a table QR code, set up their party, and submit carts;
//! staff drive the kitchen queue and the menu from an admin panel. REST
//! for state changes, WebSocket rooms for the live fan-out.
//!
//! # Module structure
//!
//! ```text
//! dine-server/src/
//! ├── api/        # axum routes and handlers (+ /ws)
//! ├── auth/       # JWT, argon2, bearer middleware
//! ├── db/         # query layer over the SQLite pool
//! ├── live/       # room-keyed broadcast hub
//! ├── config.rs   # environment configuration
//! ├── error.rs    # ServiceError bridge (sqlx/AppError → envelope)
//! └── state.rs    # pool + hub + jwt, migrations, admin bootstrap
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod live;
pub mod state;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
pub use state::AppState;

// Re-export the shared framework types handlers live on
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
