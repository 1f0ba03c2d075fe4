use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for registering a new customer
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Login identifier; normalized to lowercase before storage (required)
    pub email: String,

    pub first_name: String,

    pub last_name: String,

    /// International format, e.g. "+15551234567" (required)
    pub phone_number: String,

    pub password: String,

    /// Must match `password` exactly
    pub password_confirm: String,

    /// ISO date, e.g. "1990-04-12"
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    /// "unspecified", "male" or "female"
    #[serde(default)]
    pub gender: Option<String>,

    /// "unspecified", "single", "divorced", "widowed" or "married"
    #[serde(default)]
    pub marital_status: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}
