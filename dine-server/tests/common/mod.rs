//! Shared harness for the API integration tests
//!
//! Each test gets its own tempfile-backed SQLite database with the full
//! migration set (schema + seed: tables 1-10, the Thai menu). Requests
//! are driven straight through the axum `Router` with `oneshot`, no
//! listening socket involved.

// Not every test binary uses every helper
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use dine_server::{AppState, Config, api};

pub struct TestApp {
    pub state: AppState,
    router: Router,
    _tmp: TempDir,
}

/// Test password for the bootstrapped admin; deliberately NOT admin123
/// so the backdoor-removal test means something.
pub const ADMIN_PASSWORD: &str = "integration-test-pw";

impl TestApp {
    pub async fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let config = Config {
            database_path: tmp.path().join("test.db").display().to_string(),
            http_port: 0,
            environment: "development".to_string(),
            jwt_secret: "test-secret-key-at-least-32-chars-long".to_string(),
            jwt_expiration_hours: 2,
            admin_username: "admin".to_string(),
            admin_password: ADMIN_PASSWORD.to_string(),
        };
        let state = AppState::new(&config).await.expect("state init");
        let router = api::create_router(state.clone());
        Self {
            state,
            router,
            _tmp: tmp,
        }
    }

    /// Drive one request through the router and decode the JSON body
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router oneshot");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    /// GET with an Authorization header (pass the full header value)
    pub async fn get_with_auth(&self, uri: &str, auth: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .header("authorization", auth)
            .body(Body::empty())
            .unwrap();
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router oneshot");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = serde_json::from_slice(&bytes).expect("json body");
        (status, json)
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn post_empty(&self, uri: &str) -> (StatusCode, Value) {
        self.request("POST", uri, None).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request("DELETE", uri, None).await
    }

    /// Start a two-person session on a table; returns (session_id, avatar_ids)
    pub async fn seed_session(&self, table_id: i64) -> (i64, Vec<i64>) {
        let (status, body) = self
            .post(
                "/api/sessions",
                serde_json::json!({
                    "tableId": table_id,
                    "peopleCount": 2,
                    "avatars": [
                        {"animal": "🦊", "nickname": "Fox"},
                        {"animal": "🐼"}
                    ]
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "session create failed: {body}");
        let session_id = body["data"]["sessionId"].as_i64().unwrap();

        let (_, session) = self.get(&format!("/api/sessions/{session_id}")).await;
        let avatar_ids = session["data"]["avatars"]
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_i64().unwrap())
            .collect();
        (session_id, avatar_ids)
    }

    /// Submit a one-line cart; returns (order_id, queue_number)
    pub async fn seed_order(
        &self,
        session_id: i64,
        table_id: i64,
        avatar_id: i64,
    ) -> (i64, String) {
        let (status, body) = self
            .post(
                "/api/orders",
                serde_json::json!({
                    "sessionId": session_id,
                    "tableId": table_id,
                    "items": [
                        {"avatarId": avatar_id, "itemId": 106, "quantity": 1,
                         "basePrice": 100.0, "finalPrice": 100.0}
                    ],
                    "totalAmount": 100.0
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "order create failed: {body}");
        (
            body["data"]["orderId"].as_i64().unwrap(),
            body["data"]["queueNumber"].as_str().unwrap().to_string(),
        )
    }
}
