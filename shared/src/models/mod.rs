//! Data models
//!
//! Shared between the server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod admin_user;
pub mod avatar;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod session;

// Re-exports
pub use admin_user::*;
pub use avatar::*;
pub use dining_table::*;
pub use menu_item::*;
pub use order::*;
pub use session::*;
