// Shared helpers for driving the router in-process.
#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use vendor_console::{router, AppState, Database};

pub struct TestApp {
    pub app: Router,
    pub db: Database,
}

/// Router backed by a fresh, migrated in-memory database.
pub async fn setup() -> TestApp {
    let db = Database::connect("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .expect("Failed to open in-memory database");
    db.migrate().await.expect("Failed to run migrations");

    TestApp {
        app: router(AppState::new(db.clone())),
        db,
    }
}

impl TestApp {
    /// Send a request and decode the JSON reply.
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not JSON")
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// POST a create request and return the assigned id.
    pub async fn create(&self, uri: &str, body: Value) -> i64 {
        let (status, json) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
        json["id"].as_i64().expect("create reply carries an id")
    }
}
