//! Customer entity - the central record of the system.

use crate::{Gender, MaritalStatus};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer record. Customers double as login accounts: a record created
/// through registration carries a password hash, while one created through
/// the record-add flow has no credentials and cannot sign in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    /// Unique login identifier, stored lowercased and trimmed
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2id PHC string. None = no usable credentials.
    pub password_hash: Option<String>,
    /// Unique when present, international format
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub next_of_kin_name: Option<String>,
    pub next_of_kin_phone: Option<String>,
    /// Stored path reference, not the image itself
    pub profile_picture: Option<String>,
    /// Email-confirmation token, unique per customer
    pub activation_key: Uuid,
    pub confirmed_email: bool,
    pub otp_code: Option<u32>,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub bank_info_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with default values.
    /// The caller is expected to have normalized the email already.
    pub fn new(email: String, first_name: String, last_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            first_name,
            last_name,
            password_hash: None,
            phone_number: None,
            date_of_birth: None,
            gender: Gender::Unspecified,
            marital_status: MaritalStatus::Unspecified,
            address: None,
            city: None,
            state: None,
            zipcode: None,
            next_of_kin_name: None,
            next_of_kin_phone: None,
            profile_picture: None,
            activation_key: Uuid::new_v4(),
            confirmed_email: false,
            otp_code: None,
            is_staff: false,
            is_superuser: false,
            is_active: true,
            bank_info_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last" display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this record can be used to sign in
    pub fn has_credentials(&self) -> bool {
        self.password_hash.is_some()
    }
}
