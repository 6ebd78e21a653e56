//! Dining Table Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dining table status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum TableStatus {
    #[default]
    Free,
    Occupied,
    Reserved,
    Dirty,
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatus::Free => "free",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Dirty => "dirty",
        }
    }

    /// Parse a client-supplied status string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "free" => Some(TableStatus::Free),
            "occupied" => Some(TableStatus::Occupied),
            "reserved" => Some(TableStatus::Reserved),
            "dirty" => Some(TableStatus::Dirty),
            _ => None,
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Dining table entity
///
/// `table_number` is the printed display code customers scan; it never
/// changes after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct DiningTable {
    pub id: i64,
    pub table_number: i64,
    pub capacity: i32,
    pub status: TableStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(TableStatus::parse("free"), Some(TableStatus::Free));
        assert_eq!(TableStatus::parse("dirty"), Some(TableStatus::Dirty));
        assert_eq!(TableStatus::parse("FREE"), None);
        assert_eq!(TableStatus::parse("broken"), None);
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&TableStatus::Occupied).unwrap();
        assert_eq!(json, r#""occupied""#);
        let status: TableStatus = serde_json::from_str(r#""reserved""#).unwrap();
        assert_eq!(status, TableStatus::Reserved);
    }
}
