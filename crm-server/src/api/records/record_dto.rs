use crm_core::Customer;

use serde::Serialize;

/// Customer record DTO for JSON serialization.
/// Credential material (password hash, activation key, OTP) never leaves
/// the server.
#[derive(Debug, Serialize)]
pub struct RecordDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    /// ISO date, e.g. "1990-04-12"
    pub date_of_birth: Option<String>,
    pub gender: String,
    pub marital_status: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub next_of_kin_name: Option<String>,
    pub next_of_kin_phone: Option<String>,
    pub profile_picture: Option<String>,
    pub confirmed_email: bool,
    pub is_active: bool,
    pub bank_info_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Customer> for RecordDto {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id.to_string(),
            email: c.email,
            first_name: c.first_name,
            last_name: c.last_name,
            phone_number: c.phone_number,
            date_of_birth: c.date_of_birth.map(|d| d.to_string()),
            gender: c.gender.to_string(),
            marital_status: c.marital_status.to_string(),
            address: c.address,
            city: c.city,
            state: c.state,
            zipcode: c.zipcode,
            next_of_kin_name: c.next_of_kin_name,
            next_of_kin_phone: c.next_of_kin_phone,
            profile_picture: c.profile_picture,
            confirmed_email: c.confirmed_email,
            is_active: c.is_active,
            bank_info_id: c.bank_info_id.map(|b| b.to_string()),
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
