//! WebSocket endpoint — 房间订阅与事件推送
//!
//! GET /ws，无需认证（与 REST 面一致，加入房间是公开的）。
//!
//! 协议:
//! - Client → Server: ClientCommand (join-admin / join-customer)
//! - Server → Client: ServerEvent，JSON `{"event": ..., "data": ...}`
//!
//! A connection holds at most one admin subscription and one table
//! subscription; a second join-customer replaces the first. Missed
//! events are gone — there is no replay, clients re-poll over REST
//! after a reconnect.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use shared::events::{ClientCommand, ServerEvent};
use tokio::sync::broadcast;
use tokio::time::Duration;

use crate::live::{ADMIN_ROOM, table_room};
use crate::state::AppState;

/// Keepalive interval; intermediaries drop idle connections sooner
const PING_INTERVAL_SECS: u64 = 30;

/// GET /ws
pub async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| ws_session(socket, state))
}

async fn ws_session(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();

    tracing::debug!("WS client connected");

    // 订阅槽位：admin-room 和 table-<N> 各一个
    let mut admin_rx: Option<broadcast::Receiver<ServerEvent>> = None;
    let mut table_rx: Option<broadcast::Receiver<ServerEvent>> = None;
    let mut joined_table: Option<i64> = None;

    let mut ping_interval = tokio::time::interval(Duration::from_secs(PING_INTERVAL_SECS));
    ping_interval.tick().await; // skip immediate

    loop {
        tokio::select! {
            _ = ping_interval.tick() => {
                if sink.send(Message::Ping(vec![].into())).await.is_err() {
                    break;
                }
            }

            event = recv_or_pending(&mut admin_rx), if admin_rx.is_some() => {
                match event {
                    Ok(event) => {
                        if send_event(&mut sink, &event).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        // 掉队即丢弃，继续接收后续事件
                        tracing::warn!(missed, room = ADMIN_ROOM, "WS subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => admin_rx = None,
                }
            }

            event = recv_or_pending(&mut table_rx), if table_rx.is_some() => {
                match event {
                    Ok(event) => {
                        if send_event(&mut sink, &event).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, table = ?joined_table, "WS subscriber lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => table_rx = None,
                }
            }

            msg = stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ClientCommand>(&text) {
                            Ok(ClientCommand::JoinAdmin) => {
                                tracing::debug!("WS client joined {ADMIN_ROOM}");
                                admin_rx = Some(state.hub.subscribe(ADMIN_ROOM));
                            }
                            Ok(ClientCommand::JoinCustomer { table_number }) => {
                                tracing::debug!(table_number, "WS client joined table room");
                                table_rx = Some(state.hub.subscribe(&table_room(table_number)));
                                joined_table = Some(table_number);
                            }
                            Err(e) => {
                                tracing::debug!(error = %e, "Ignoring unparseable WS message");
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => {} // pings/pongs handled by the protocol layer
                    Some(Err(e)) => {
                        tracing::debug!(error = %e, "WS receive error");
                        break;
                    }
                }
            }
        }
    }

    tracing::debug!("WS client disconnected");
}

/// Receive from an optional subscription; pending forever when the slot
/// is unset so the select arm never resolves.
async fn recv_or_pending(
    rx: &mut Option<broadcast::Receiver<ServerEvent>>,
) -> Result<ServerEvent, broadcast::error::RecvError> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}

async fn send_event<S>(sink: &mut S, event: &ServerEvent) -> Result<(), ()>
where
    S: futures::Sink<Message, Error = axum::Error> + Unpin,
{
    let json = serde_json::to_string(event).map_err(|_| ())?;
    sink.send(Message::Text(json.into())).await.map_err(|_| ())
}
