use serde::Serialize;

/// Response body for successful deletes
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: String,
}
