use crate::{ConfigError, ConfigErrorResult, DEFAULT_SESSION_TTL_SECS, MIN_SESSION_TTL_SECS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Sessions silently expire after this many seconds
    pub session_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.session_ttl_secs < MIN_SESSION_TTL_SECS {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_secs must be >= {}, got {}",
                MIN_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        Ok(())
    }
}
