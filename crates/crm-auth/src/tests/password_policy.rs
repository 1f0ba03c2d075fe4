use crate::password_policy::check_strength;
use crate::AuthError;

fn expect_weak(result: crate::Result<()>) -> String {
    match result {
        Err(AuthError::WeakPassword { message, .. }) => message,
        other => panic!("expected WeakPassword, got {:?}", other),
    }
}

#[test]
fn test_accepts_strong_password() {
    assert!(check_strength("Str0ngPass!", &["alice", "smith"]).is_ok());
}

#[test]
fn test_rejects_short_password() {
    let message = expect_weak(check_strength("Ab1!", &[]));
    assert!(message.contains("at least 8"));
}

#[test]
fn test_rejects_entirely_numeric() {
    let message = expect_weak(check_strength("1234567890", &[]));
    assert!(message.contains("numeric"));
}

#[test]
fn test_rejects_common_password() {
    let message = expect_weak(check_strength("Password123", &[]));
    assert!(message.contains("common"));
}

#[test]
fn test_rejects_name_derived_password() {
    let message = expect_weak(check_strength("alicesmith99", &["alice", "smith"]));
    assert!(message.contains("personal information"));
}

#[test]
fn test_rejects_email_local_part() {
    assert!(check_strength("xbob.jonesx", &["bob.jones", "Bob", "Jones"]).is_err());
}

#[test]
fn test_short_personal_fields_are_ignored() {
    // "al" appears in "Mus1cally" but two-char fragments don't count
    assert!(check_strength("Mus1cally!", &["al", "ca"]).is_ok());
}
