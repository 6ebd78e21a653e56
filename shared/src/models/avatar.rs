//! Avatar Model

use serde::{Deserialize, Serialize};

/// Avatar entity (one member of a dining party)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Avatar {
    pub id: i64,
    pub session_id: i64,
    /// Position within the party, 0-based
    pub avatar_index: i32,
    pub animal_emoji: String,
    pub nickname: String,
    pub is_ordering: bool,
    pub payment_method: String,
}

/// Avatar as submitted at party setup; every field is optional and
/// falls back to a server-side default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarCreate {
    pub animal: Option<String>,
    pub nickname: Option<String>,
    #[serde(rename = "isOrdering")]
    pub is_ordering: Option<bool>,
    #[serde(rename = "paymentMethod")]
    pub payment_method: Option<String>,
}
