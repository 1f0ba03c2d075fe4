use crate::session_store::{SessionStore, SessionToken};

use std::str::FromStr;
use std::time::Duration;

use uuid::Uuid;

fn store() -> SessionStore {
    SessionStore::new(Duration::from_secs(3600))
}

#[tokio::test]
async fn test_start_and_resolve_session() {
    let store = store();
    let customer_id = Uuid::new_v4();

    let token = store.start_session(customer_id).await;

    assert_eq!(store.current_identity(&token).await, Some(customer_id));
    assert_eq!(store.active_count().await, 1);
}

#[tokio::test]
async fn test_unknown_token_resolves_to_none() {
    let store = store();
    let token = SessionToken::from_str(&Uuid::new_v4().to_string()).unwrap();

    assert_eq!(store.current_identity(&token).await, None);
}

#[tokio::test]
async fn test_end_session_is_idempotent() {
    let store = store();
    let token = store.start_session(Uuid::new_v4()).await;

    store.end_session(&token).await;
    assert_eq!(store.current_identity(&token).await, None);

    // Second logout with the same token: no-op, no panic
    store.end_session(&token).await;
    assert_eq!(store.active_count().await, 0);
}

#[tokio::test]
async fn test_expired_session_is_evicted() {
    let store = SessionStore::new(Duration::ZERO);
    let token = store.start_session(Uuid::new_v4()).await;

    assert_eq!(store.current_identity(&token).await, None);
    // Lookup evicted the stale entry
    assert_eq!(store.active_count().await, 0);
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let store = store();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let alice_token = store.start_session(alice).await;
    let bob_token = store.start_session(bob).await;

    store.end_session(&alice_token).await;

    assert_eq!(store.current_identity(&alice_token).await, None);
    assert_eq!(store.current_identity(&bob_token).await, Some(bob));
}

#[test]
fn test_token_string_round_trip() {
    let uuid = Uuid::new_v4();
    let token = SessionToken::from_str(&uuid.to_string()).unwrap();

    assert_eq!(token.to_string(), uuid.to_string());
    assert!(SessionToken::from_str("not-a-token").is_err());
}
