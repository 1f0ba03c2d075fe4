use crate::RecordDto;

use serde::Serialize;

/// Response for listing customer records
#[derive(Debug, Serialize)]
pub struct RecordListResponse {
    pub records: Vec<RecordDto>,
}
