#![allow(dead_code)]

//! Test infrastructure for crm-db repository tests

use crm_core::Customer;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

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

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A registered customer with credentials and a phone number.
pub fn sample_customer(email: &str, phone: &str) -> Customer {
    let mut customer = Customer::new(email.to_string(), "Alice".to_string(), "Smith".to_string());
    customer.password_hash = Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string());
    customer.phone_number = Some(phone.to_string());
    customer.address = Some("1 Main St".to_string());
    customer.city = Some("Springfield".to_string());
    customer
}
