//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::AppState;

use crm_auth::SessionToken;

use std::future::Future;
use std::panic::Location;
use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the signed-in customer from the bearer session token.
///
/// Protected handlers take this as an argument; requests without a live
/// session are rejected with 401 before the handler body runs, so no
/// persistence access happens for unauthenticated callers.
pub struct SessionIdentity(pub Uuid);

impl FromRequestParts<AppState> for SessionIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = bearer_token(&parts.headers).ok_or_else(|| ApiError::Unauthorized {
                message: "You must be logged in to access this resource".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

            match state.sessions.current_identity(&token).await {
                Some(customer_id) => {
                    log::debug!("Session resolved to customer {}", customer_id);
                    Ok(SessionIdentity(customer_id))
                }
                None => Err(ApiError::Unauthorized {
                    message: "Session is invalid or has expired".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
            }
        }
    }
}

/// Parse `Authorization: Bearer <token>` into a session token.
/// Returns None for a missing header, wrong scheme, or malformed token.
pub fn bearer_token(headers: &HeaderMap) -> Option<SessionToken> {
    let auth_header = headers.get("authorization")?.to_str().ok()?;

    let token = auth_header.strip_prefix("Bearer ")?;
    match SessionToken::from_str(token) {
        Ok(token) => Some(token),
        Err(_) => {
            log::warn!("Malformed session token in Authorization header");
            None
        }
    }
}
