//! Realtime WebSocket protocol
//!
//! Server → Client: ServerEvent, broadcast into rooms
//! Client → Server: ClientCommand, room join control
//!
//! Wire shape is `{"event": "<kebab-name>", "data": {...}}` with
//! camelCase payload fields, matching what the web clients expect.

use serde::{Deserialize, Serialize};

use crate::models::{OrderStatus, TableStatus};

/// Server → Client broadcast event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A cart was submitted; admin dashboards refresh their queue
    NewOrder {
        #[serde(rename = "orderId")]
        order_id: i64,
        #[serde(rename = "queueNumber")]
        queue_number: String,
        #[serde(rename = "tableNumber")]
        table_number: i64,
        #[serde(rename = "totalAmount")]
        total_amount: f64,
        #[serde(rename = "itemCount")]
        item_count: i64,
    },

    /// Kitchen moved an order through the status machine
    OrderStatusUpdated {
        #[serde(rename = "orderId")]
        order_id: i64,
        #[serde(rename = "queueNumber")]
        queue_number: String,
        status: OrderStatus,
    },

    /// A customer scanned a table code
    TableScanned {
        #[serde(rename = "tableId")]
        table_id: i64,
        #[serde(rename = "tableNumber")]
        table_number: i64,
        status: TableStatus,
    },

    /// Staff cleared a table back to free
    TableReset {
        #[serde(rename = "tableId")]
        table_id: i64,
    },

    /// Direct table status overwrite
    TableStatusUpdated {
        #[serde(rename = "tableId")]
        table_id: i64,
        status: TableStatus,
    },

    /// A party finished setup
    SessionCreated {
        #[serde(rename = "sessionId")]
        session_id: i64,
        #[serde(rename = "tableId")]
        table_id: i64,
        #[serde(rename = "peopleCount")]
        people_count: i32,
    },

    /// A party checked out
    SessionEnded {
        #[serde(rename = "sessionId")]
        session_id: i64,
        #[serde(rename = "tableId")]
        table_id: i64,
    },

    MenuItemCreated {
        #[serde(rename = "itemId")]
        item_id: i64,
    },

    MenuItemUpdated {
        #[serde(rename = "itemId")]
        item_id: i64,
    },

    MenuItemDeleted {
        #[serde(rename = "itemId")]
        item_id: i64,
    },
}

/// Client → Server command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ClientCommand {
    /// Join the staff room (every event lands there)
    JoinAdmin,
    /// Join one table's room (order status for that table only)
    JoinCustomer {
        #[serde(rename = "tableNumber")]
        table_number: i64,
    },
}
