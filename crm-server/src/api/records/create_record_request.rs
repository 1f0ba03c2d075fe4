use serde::Deserialize;

/// Request body for adding a customer record without credentials.
/// All fields are required, mirroring the record form.
#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
}
