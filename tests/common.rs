// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builds in-memory server resources and drives the router with JSON requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)] // Not every test binary uses every helper

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use salon_booking_server::{
    auth::AuthManager,
    config::environment::{
        AuthConfig, CorsConfig, DatabaseConfig, Environment, LogLevel, ServerConfig,
    },
    database::{test_utils::create_test_db, Database},
    server::{BookingServer, ServerResources},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Secret used by every test token
pub const TEST_JWT_SECRET: &[u8] = b"integration_test_secret";

/// Build a test configuration pointing at an in-memory store
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
        },
        auth: AuthConfig {
            jwt_secret: String::from_utf8_lossy(TEST_JWT_SECRET).into_owned(),
            jwt_expiry_hours: 1,
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    }
}

/// Create server resources over a fresh in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    let database = create_test_db().await.unwrap();
    let auth_manager = AuthManager::new(TEST_JWT_SECRET, 1);
    Arc::new(ServerResources::new(database, auth_manager, test_config()))
}

/// Create server resources over an existing database handle
pub fn resources_with_database(database: Database) -> Arc<ServerResources> {
    let auth_manager = AuthManager::new(TEST_JWT_SECRET, 1);
    Arc::new(ServerResources::new(database, auth_manager, test_config()))
}

/// Build the full application router for a set of resources
pub fn test_router(resources: &Arc<ServerResources>) -> Router {
    BookingServer::router(Arc::clone(resources))
}

/// Send a JSON request and return the response status and parsed body
pub async fn send_json(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let request = if let Some(body) = body {
        builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Register a user through the API and return their bearer token
pub async fn register_user(router: &Router, username: &str, password: &str) -> String {
    let (status, body) = send_json(
        router,
        "POST",
        "/api/auth/register",
        Some(serde_json::json!({ "username": username, "password": password })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "registration failed: {body}");
    body["token"].as_str().unwrap().to_owned()
}

/// Request body for a valid booking, overridable per test
pub fn booking_body(staff_id: i64, date: &str, start: &str, end: &str) -> Value {
    serde_json::json!({
        "customer_id": 1,
        "service_id": 1,
        "staff_id": staff_id,
        "booking_date": date,
        "start_time": start,
        "end_time": end,
        "notes": "integration test booking"
    })
}
