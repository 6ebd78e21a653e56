//! Dining Session Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::avatar::AvatarCreate;

/// Dining session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum SessionStatus {
    #[default]
    Active,
    Completed,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Active => "active",
            SessionStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dining session entity
///
/// One party at one table. `ended_at` is set only when the session
/// completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Session {
    pub id: i64,
    pub table_id: i64,
    pub people_count: i32,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

/// Create session payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreate {
    #[serde(rename = "tableId")]
    pub table_id: Option<i64>,
    #[serde(rename = "peopleCount")]
    pub people_count: Option<i32>,
    #[serde(default)]
    pub avatars: Vec<AvatarCreate>,
}
