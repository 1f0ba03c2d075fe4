use crate::password::{hash, verify};

#[test]
fn test_hash_and_verify_round_trip() {
    let hashed = hash("Str0ngPass!").unwrap();

    assert!(hashed.starts_with("$argon2id$"));
    assert!(verify("Str0ngPass!", &hashed).unwrap());
    assert!(!verify("WrongPass!", &hashed).unwrap());
}

#[test]
fn test_hash_is_salted() {
    let a = hash("Str0ngPass!").unwrap();
    let b = hash("Str0ngPass!").unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_verify_rejects_malformed_hash() {
    assert!(verify("anything", "not-a-phc-string").is_err());
    assert!(verify("anything", "").is_err());
}
