use serde::Serialize;

/// Response for logout. Always succeeds, even without a live session.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub logged_out: bool,
}
