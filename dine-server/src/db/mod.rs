//! Database access layer
//!
//! Free query functions over the shared SQLite pool. Row types that
//! exist only as query projections (joins, aggregates) live next to
//! their queries; plain entity rows come from `shared::models`.
//!
//! All day-bucketing uses SQLite `DATE(...)`, which evaluates in UTC,
//! so "today" is the UTC calendar day everywhere.

pub mod admin_users;
pub mod dashboard;
pub mod menu;
pub mod orders;
pub mod sessions;
pub mod tables;
