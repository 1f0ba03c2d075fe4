use crate::{AuthConfig, DEFAULT_SESSION_TTL_SECS};

#[test]
fn test_default_is_valid() {
    let config = AuthConfig::default();
    assert_eq!(config.session_ttl_secs, DEFAULT_SESSION_TTL_SECS);
    assert!(config.validate().is_ok());
}

#[test]
fn test_tiny_ttl_is_rejected() {
    let config = AuthConfig {
        session_ttl_secs: 10,
    };

    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("session_ttl_secs"));
}
