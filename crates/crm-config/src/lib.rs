pub mod auth_config;
pub mod config;
pub mod database_config;
pub mod error;
pub mod log_level;
pub mod logging_config;
pub mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

use log::LevelFilter;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8460;
pub const MIN_PORT: u16 = 1024;

pub const DEFAULT_DATABASE_PATH: &str = "crm.db";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_DIRECTORY: &str = "logs";

/// Two weeks, matching the usual web-session default
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1_209_600;
pub const MIN_SESSION_TTL_SECS: u64 = 60;

#[cfg(test)]
mod tests;
