//! Order lifecycle over the HTTP surface: submission, queue snapshot,
//! status machine, admin edits and deletion.

mod common;

use common::TestApp;
use http::StatusCode;
use serde_json::json;
use shared::events::ServerEvent;
use shared::models::OrderStatus;

use dine_server::live::{ADMIN_ROOM, table_room};

fn assert_queue_code(code: &str) {
    let bytes = code.as_bytes();
    assert_eq!(bytes.len(), 3, "bad queue code {code}");
    assert!(bytes[0].is_ascii_uppercase(), "bad queue code {code}");
    assert!(bytes[1].is_ascii_digit(), "bad queue code {code}");
    assert!(bytes[2].is_ascii_digit(), "bad queue code {code}");
    assert_ne!(&code[1..], "00", "00 suffix is never issued: {code}");
}

#[tokio::test]
async fn create_order_persists_and_reads_back() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(1).await;

    let (status, body) = app
        .post(
            "/api/orders",
            json!({
                "sessionId": session_id,
                "tableId": 1,
                "items": [
                    {"avatarId": avatars[0], "itemId": 106, "quantity": 2,
                     "basePrice": 100.0, "finalPrice": 110.0,
                     "customizations": {"spicyLevel": 3, "protein": "Shrimp", "notes": "no peanuts"}},
                    {"avatarId": avatars[1], "itemId": 113, "quantity": 1,
                     "basePrice": 45.0, "finalPrice": 45.0}
                ],
                // Stored verbatim, deliberately not the sum of the lines
                "totalAmount": 123.45,
                "paymentMode": "together"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["success"], true);
    let order_id = body["data"]["orderId"].as_i64().unwrap();
    let code = body["data"]["queueNumber"].as_str().unwrap();
    assert_queue_code(code);
    assert_eq!(body["data"]["tableNumber"], 1);

    let (status, body) = app.get(&format!("/api/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["id"], order_id);
    assert_eq!(data["queue_number"], code);
    assert_eq!(data["total_amount"], 123.45);
    assert_eq!(data["payment_mode"], "together");
    assert_eq!(data["status"], "pending");
    assert_eq!(data["table_number"], 1);
    assert_eq!(data["people_count"], 2);

    let items = data["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let pad_thai = items
        .iter()
        .find(|i| i["menu_item_id"] == 106)
        .expect("pad thai line");
    assert_eq!(pad_thai["quantity"], 2);
    assert_eq!(pad_thai["final_price"], 110.0);
    assert_eq!(pad_thai["spicy_level"], 3);
    assert_eq!(pad_thai["protein_choice"], "Shrimp");
    assert_eq!(pad_thai["special_notes"], "no peanuts");
    assert_eq!(pad_thai["name_en"], "Pad Thai");
    assert_eq!(pad_thai["nickname"], "Fox");

    let tea = items.iter().find(|i| i["menu_item_id"] == 113).unwrap();
    assert_eq!(tea["spicy_level"], 0);
    assert_eq!(tea["protein_choice"], "Original");
    assert!(tea["special_notes"].is_null());
}

#[tokio::test]
async fn create_order_publishes_new_order_event() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(2).await;

    let mut admin_rx = app.state.hub.subscribe(ADMIN_ROOM);
    let (order_id, code) = app.seed_order(session_id, 2, avatars[0]).await;

    let event = admin_rx.try_recv().expect("new-order in admin room");
    assert_eq!(
        event,
        ServerEvent::NewOrder {
            order_id,
            queue_number: code,
            table_number: 2,
            total_amount: 100.0,
            item_count: 1,
        }
    );
}

#[tokio::test]
async fn create_order_rejects_missing_fields_and_empty_cart() {
    let app = TestApp::new().await;
    let (session_id, _) = app.seed_session(1).await;

    // No sessionId
    let (status, body) = app
        .post("/api/orders", json!({"tableId": 1, "items": [], "totalAmount": 0.0}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing required fields");

    // Empty cart
    let (status, body) = app
        .post(
            "/api/orders",
            json!({"sessionId": session_id, "tableId": 1, "items": [], "totalAmount": 0.0}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields");

    // Neither attempt left a row behind
    let (_, body) = app.get("/api/orders/table/1").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_order_rolls_back_wholly_on_bad_item() {
    let app = TestApp::new().await;
    let (session_id, _) = app.seed_session(1).await;

    // Order row is insertable, the item row trips the avatar FK
    let (status, body) = app
        .post(
            "/api/orders",
            json!({
                "sessionId": session_id,
                "tableId": 1,
                "items": [
                    {"avatarId": 999_999_999, "itemId": 106, "quantity": 1,
                     "basePrice": 100.0, "finalPrice": 100.0}
                ],
                "totalAmount": 100.0
            }),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Database error");

    // The order row must not survive the failed item insert
    let (_, body) = app.get("/api/orders/table/1").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
    let (_, body) = app.get("/api/dashboard/stats").await;
    assert_eq!(body["data"]["todayOrders"], 0);
}

#[tokio::test]
async fn queue_codes_stay_unique_within_the_day() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(1).await;

    let mut seen = std::collections::HashSet::new();
    for _ in 0..30 {
        let (_, code) = app.seed_order(session_id, 1, avatars[0]).await;
        assert_queue_code(&code);
        assert!(seen.insert(code.clone()), "duplicate queue code {code}");
        // Space submissions so id suffixes never share a millisecond
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    }
}

#[tokio::test]
async fn queue_snapshot_covers_every_table() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(3).await;
    let (order_id, code) = app.seed_order(session_id, 3, avatars[0]).await;

    let (status, body) = app.get("/api/orders/queue/all").await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 10);

    // Ordered by table number, so table 3 sits at index 2
    let entry = &entries[2];
    assert_eq!(entry["table_number"], 3);
    assert_eq!(entry["status"], "occupied");
    assert_eq!(entry["order"]["id"], order_id);
    assert_eq!(entry["order"]["queue_number"], code);
    assert_eq!(entry["order"]["item_count"], 1);

    // Tables without an active order carry a null slot
    assert!(entries[0]["order"].is_null());

    // A served order leaves the queue
    let (status, _) = app
        .put(&format!("/api/orders/{order_id}/status"), json!({"status": "served"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get("/api/orders/queue/all").await;
    assert!(body["data"][2]["order"].is_null());
}

#[tokio::test]
async fn update_status_fans_out_to_admin_and_table_rooms() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(5).await;
    let (order_id, code) = app.seed_order(session_id, 5, avatars[0]).await;

    let mut admin_rx = app.state.hub.subscribe(ADMIN_ROOM);
    let mut table_rx = app.state.hub.subscribe(&table_room(5));

    let (status, body) = app
        .put(&format!("/api/orders/{order_id}/status"), json!({"status": "cooking"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order status updated");

    let expected = ServerEvent::OrderStatusUpdated {
        order_id,
        queue_number: code,
        status: OrderStatus::Cooking,
    };
    assert_eq!(admin_rx.try_recv().unwrap(), expected);
    assert_eq!(table_rx.try_recv().unwrap(), expected);
}

#[tokio::test]
async fn update_status_validates_input_and_existence() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(1).await;
    let (order_id, _) = app.seed_order(session_id, 1, avatars[0]).await;

    // Unknown status string
    let (status, body) = app
        .put(&format!("/api/orders/{order_id}/status"), json!({"status": "burnt"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");

    // Status field missing entirely
    let (status, body) = app
        .put(&format!("/api/orders/{order_id}/status"), json!({}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");

    // Valid status, unknown order
    let (status, body) = app
        .put("/api/orders/424242/status", json!({"status": "ready"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");

    // Backwards moves are allowed
    for s in ["served", "pending", "cancelled", "preparing"] {
        let (status, _) = app
            .put(&format!("/api/orders/{order_id}/status"), json!({"status": s}))
            .await;
        assert_eq!(status, StatusCode::OK, "move to {s}");
    }
}

#[tokio::test]
async fn edit_order_overwrites_fields_and_reparents() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(1).await;
    let (order_id, _) = app.seed_order(session_id, 1, avatars[0]).await;

    let (status, body) = app
        .put(
            &format!("/api/orders/{order_id}"),
            json!({
                "queue_number": "Z99",
                "status": "ready",
                "total_amount": 555.0,
                "table_number": 4
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Order updated");

    let (_, body) = app.get(&format!("/api/orders/{order_id}")).await;
    assert_eq!(body["data"]["queue_number"], "Z99");
    assert_eq!(body["data"]["status"], "ready");
    assert_eq!(body["data"]["total_amount"], 555.0);
    assert_eq!(body["data"]["table_number"], 4);
}

#[tokio::test]
async fn edit_order_ignores_unknown_table_but_rejects_bad_status() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(2).await;
    let (order_id, _) = app.seed_order(session_id, 2, avatars[0]).await;

    // Unknown table number: field update stands, parent table keeps
    let (status, _) = app
        .put(
            &format!("/api/orders/{order_id}"),
            json!({"queue_number": "B07", "status": "preparing",
                   "total_amount": 80.0, "table_number": 9999}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = app.get(&format!("/api/orders/{order_id}")).await;
    assert_eq!(body["data"]["queue_number"], "B07");
    assert_eq!(body["data"]["table_number"], 2);

    let (status, body) = app
        .put(
            &format!("/api/orders/{order_id}"),
            json!({"queue_number": "B08", "status": "nonsense", "total_amount": 80.0}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");
}

#[tokio::test]
async fn delete_order_hard_deletes() {
    let app = TestApp::new().await;
    let (session_id, avatars) = app.seed_session(1).await;
    let (order_id, _) = app.seed_order(session_id, 1, avatars[0]).await;

    let (status, body) = app.delete(&format!("/api/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order deleted");

    let (status, body) = app.get(&format!("/api/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");

    // Second delete finds nothing
    let (status, _) = app.delete(&format!("/api/orders/{order_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn orders_by_table_lists_only_that_table() {
    let app = TestApp::new().await;
    let (session_a, avatars_a) = app.seed_session(1).await;
    let (session_b, avatars_b) = app.seed_session(2).await;

    let (order_a, _) = app.seed_order(session_a, 1, avatars_a[0]).await;
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    app.seed_order(session_b, 2, avatars_b[0]).await;

    let (status, body) = app.get("/api/orders/table/1").await;
    assert_eq!(status, StatusCode::OK);
    let orders = body["data"].as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], order_a);
    assert_eq!(orders[0]["table_number"], 1);
    assert_eq!(orders[0]["item_count"], 1);
}
