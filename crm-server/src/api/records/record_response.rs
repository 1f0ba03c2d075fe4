use crate::RecordDto;

use serde::Serialize;

/// Response wrapping a single customer record
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub record: RecordDto,
}
