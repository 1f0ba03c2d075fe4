#![allow(dead_code)]

//! Test infrastructure for crm-server API tests

use crm_auth::SessionStore;
use crm_core::Customer;
use crm_db::CustomerRepository;
use crm_server::{AppState, build_router};

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

/// Create a test pool with in-memory SQLite.
/// A single connection keeps the in-memory database alive across queries.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("../crates/crm-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_state() -> AppState {
    create_test_state_with_ttl(Duration::from_secs(3600)).await
}

/// Create AppState with a specific session TTL
pub async fn create_test_state_with_ttl(ttl: Duration) -> AppState {
    AppState {
        pool: create_test_pool().await,
        sessions: SessionStore::new(ttl),
    }
}

/// Drive one request through a fresh router and decode the JSON body.
pub async fn send_json(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Registration body with a strong password and sensible defaults
pub fn register_body(email: &str, phone: &str, password: &str) -> Value {
    json!({
        "email": email,
        "first_name": "Alice",
        "last_name": "Smith",
        "phone_number": phone,
        "password": password,
        "password_confirm": password,
    })
}

/// Register a customer through the API; returns (session token, record id)
pub async fn register_test_customer(state: &AppState, email: &str, phone: &str) -> (String, String) {
    let (status, json) = send_json(
        state,
        "POST",
        "/api/v1/auth/register",
        None,
        Some(register_body(email, phone, "Str0ngPass!")),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "registration failed: {}", json);

    let token = json["token"].as_str().unwrap().to_string();
    let id = json["record"]["id"].as_str().unwrap().to_string();
    (token, id)
}

/// Seed a credential-less record directly through the repository
pub async fn seed_record(state: &AppState, email: &str, phone: &str) -> Uuid {
    let mut customer = Customer::new(email.to_string(), "Seeded".to_string(), "Record".to_string());
    customer.phone_number = Some(phone.to_string());

    CustomerRepository::new(state.pool.clone())
        .create(&customer)
        .await
        .expect("Failed to seed record");

    customer.id
}

/// Number of records visible through the public listing
pub async fn record_count(state: &AppState) -> usize {
    let (status, json) = send_json(state, "GET", "/api/v1/records", None, None).await;
    assert_eq!(status, StatusCode::OK);
    json["records"].as_array().unwrap().len()
}
