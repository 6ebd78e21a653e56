//! RoomHub — 房间制实时事件分发
//!
//! REST handler 提交变更后向房间广播，WebSocket 连接订阅房间。
//! 不落盘、不重放：掉线的订阅者丢失错过的事件。
//!
//! ```text
//! REST handlers (orders / tables / sessions / menu)
//!       │ ServerEvent
//!       ▼
//! RoomHub
//!   ├── "admin-room"  : broadcast::Sender<ServerEvent>  (staff dashboards)
//!   └── "table-<N>"   : broadcast::Sender<ServerEvent>  (one party each)
//!           │
//!           ▼
//! WS handler (join-admin / join-customer → subscribe → 推送)
//! ```

use dashmap::DashMap;
use shared::events::ServerEvent;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Staff room; every event is mirrored here
pub const ADMIN_ROOM: &str = "admin-room";

/// Room name for one table's party
pub fn table_room(table_number: i64) -> String {
    format!("table-{table_number}")
}

/// Broadcast channel 容量 — 足以缓冲连接时突发
const BROADCAST_CAPACITY: usize = 256;

/// Room-keyed event hub
///
/// Rooms are created on first subscribe and garbage-collected once the
/// last subscriber is gone. Publishing into a room nobody joined drops
/// the event, matching fire-and-forget delivery.
#[derive(Clone, Default)]
pub struct RoomHub {
    rooms: Arc<DashMap<String, broadcast::Sender<ServerEvent>>>,
}

impl RoomHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to a room, creating it if needed
    pub fn subscribe(&self, room: &str) -> broadcast::Receiver<ServerEvent> {
        self.rooms
            .entry(room.to_string())
            .or_insert_with(|| broadcast::channel(BROADCAST_CAPACITY).0)
            .subscribe()
    }

    /// Broadcast an event into a room (无订阅者时安全丢弃)
    pub fn publish(&self, room: &str, event: ServerEvent) {
        if let Some(tx) = self.rooms.get(room) {
            if tx.send(event).is_err() && tx.receiver_count() == 0 {
                // Last subscriber left; drop the room entry
                drop(tx);
                self.rooms
                    .remove_if(room, |_, sender| sender.receiver_count() == 0);
            }
        }
    }

    /// Number of live subscribers in a room
    pub fn subscriber_count(&self, room: &str) -> usize {
        self.rooms
            .get(room)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }
}
