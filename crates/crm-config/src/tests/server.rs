use crate::ServerConfig;

#[test]
fn test_default_is_valid() {
    let config = ServerConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_port_zero_means_auto_assign() {
    let config = ServerConfig {
        port: 0,
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_privileged_port_is_rejected() {
    let config = ServerConfig {
        port: 80,
        ..Default::default()
    };

    let error = config.validate().unwrap_err();
    assert!(error.to_string().contains("server.port"));
}

#[test]
fn test_empty_host_is_rejected() {
    let config = ServerConfig {
        host: String::new(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
