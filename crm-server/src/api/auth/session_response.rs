use crate::RecordDto;

use serde::Serialize;

/// Response for a successful registration or login
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Opaque bearer token for subsequent requests
    pub token: String,
    pub record: RecordDto,
}
