use crate::{Config, DEFAULT_HOST, DEFAULT_PORT};

use serial_test::serial;

fn clear_env() {
    for var in [
        "CRM_CONFIG_DIR",
        "CRM_SERVER_HOST",
        "CRM_SERVER_PORT",
        "CRM_DATABASE_PATH",
        "CRM_LOG_LEVEL",
        "CRM_SESSION_TTL_SECS",
    ] {
        unsafe { std::env::remove_var(var) };
    }
}

#[test]
#[serial]
fn test_defaults_when_no_config_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("CRM_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_eq!(config.server.host, DEFAULT_HOST);
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_loads_toml_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        r#"
            [server]
            port = 9100

            [auth]
            session_ttl_secs = 3600
        "#,
    )
    .unwrap();
    unsafe { std::env::set_var("CRM_CONFIG_DIR", dir.path()) };

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.auth.session_ttl_secs, 3600);
    // Unlisted sections fall back to defaults
    assert_eq!(config.server.host, DEFAULT_HOST);

    clear_env();
}

#[test]
#[serial]
fn test_env_overrides_beat_file() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[server]\nport = 9100\n").unwrap();
    unsafe {
        std::env::set_var("CRM_CONFIG_DIR", dir.path());
        std::env::set_var("CRM_SERVER_PORT", "9200");
        std::env::set_var("CRM_DATABASE_PATH", "other.db");
    }

    let config = Config::load().unwrap();

    assert_eq!(config.server.port, 9200);
    assert_eq!(config.database.path, "other.db");

    clear_env();
}

#[test]
#[serial]
fn test_malformed_toml_is_an_error() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "server = not toml").unwrap();
    unsafe { std::env::set_var("CRM_CONFIG_DIR", dir.path()) };

    assert!(Config::load().is_err());

    clear_env();
}

#[test]
fn test_validate_rejects_escaping_database_path() {
    let mut config = Config::default();

    config.database.path = "../outside.db".to_string();
    assert!(config.validate().is_err());

    config.database.path = "/tmp/abs.db".to_string();
    assert!(config.validate().is_err());
}
