//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
///
/// No transition guards: staff may move an order from any status to any
/// other, including backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Cooking,
    Ready,
    Served,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Cooking => "cooking",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a client-supplied status string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "preparing" => Some(OrderStatus::Preparing),
            "cooking" => Some(OrderStatus::Cooking),
            "ready" => Some(OrderStatus::Ready),
            "served" => Some(OrderStatus::Served),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub session_id: i64,
    pub table_id: i64,
    /// Kitchen display code, letter + two digits (e.g. "A07")
    pub queue_number: String,
    /// Caller-supplied sum, stored verbatim
    pub total_amount: f64,
    pub payment_mode: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-item customization block, all optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customizations {
    #[serde(rename = "spicyLevel")]
    pub spicy_level: Option<i32>,
    pub protein: Option<String>,
    pub notes: Option<String>,
}

/// One cart line as submitted by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    #[serde(rename = "avatarId")]
    pub avatar_id: i64,
    #[serde(rename = "itemId")]
    pub item_id: i64,
    pub quantity: i32,
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    #[serde(rename = "finalPrice")]
    pub final_price: f64,
    pub customizations: Option<Customizations>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "sessionId")]
    pub session_id: Option<i64>,
    #[serde(rename = "tableId")]
    pub table_id: Option<i64>,
    #[serde(default)]
    pub items: Vec<OrderItemCreate>,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
    #[serde(rename = "paymentMode")]
    pub payment_mode: Option<String>,
}

/// Administrative edit payload; overwrites the display fields.
/// Unlike the customer-facing payloads this one travels snake_case,
/// matching the admin panel's form field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEdit {
    pub queue_number: String,
    /// Validated against the status enumeration, nothing else
    pub status: String,
    pub total_amount: f64,
    /// When this resolves to a known table, the order is re-parented
    pub table_number: Option<i64>,
}
