//! Server-side session registry.
//!
//! Sessions are ephemeral: an opaque token maps to the signed-in customer
//! until logout or expiry. Durable state lives in the database only.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

/// Opaque bearer token handed to a client at login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionToken(Uuid);

impl SessionToken {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

struct SessionEntry {
    customer_id: Uuid,
    issued_at: Instant,
}

/// Token -> customer map shared across handlers.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Mint a fresh token for a signed-in customer.
    pub async fn start_session(&self, customer_id: Uuid) -> SessionToken {
        let token = SessionToken::generate();
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            token,
            SessionEntry {
                customer_id,
                issued_at: Instant::now(),
            },
        );
        token
    }

    /// Drop a session. Unknown tokens are a no-op: logging out twice
    /// is not an error.
    pub async fn end_session(&self, token: &SessionToken) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Resolve a token to the signed-in customer, honoring the TTL.
    pub async fn current_identity(&self, token: &SessionToken) -> Option<Uuid> {
        // Fast path: valid session under the read lock
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                Some(entry) if entry.issued_at.elapsed() < self.ttl => {
                    return Some(entry.customer_id);
                }
                Some(_) => {} // expired, fall through to evict
                None => return None,
            }
        }

        // Slow path: evict the expired entry
        let mut sessions = self.sessions.write().await;
        if let Some(entry) = sessions.get(token) {
            if entry.issued_at.elapsed() < self.ttl {
                // Re-issued between the locks
                return Some(entry.customer_id);
            }
            sessions.remove(token);
        }
        None
    }

    /// Number of live (possibly expired, not yet evicted) sessions.
    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
