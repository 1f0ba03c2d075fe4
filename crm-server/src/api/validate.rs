//! Request-field checks shared by the registration and record handlers.

use crate::{ApiError, ApiResult};

use std::panic::Location;

use error_location::ErrorLocation;

#[track_caller]
pub fn ensure_nonempty(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation {
            message: format!("{} must not be empty", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub fn ensure_valid_email(email: &str) -> ApiResult<()> {
    if !crm_core::validation::is_valid_email(email) {
        return Err(ApiError::Validation {
            message: format!("{} is not a valid email address", email),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

#[track_caller]
pub fn ensure_valid_phone(field: &str, phone: &str) -> ApiResult<()> {
    if !crm_core::validation::is_valid_phone_number(phone) {
        return Err(ApiError::Validation {
            message: "Phone number must be entered in the format: '+999999999'. Up to 15 digits allowed.".to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
