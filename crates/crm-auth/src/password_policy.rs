//! Password strength policy applied at registration.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

pub const PASSWORD_MIN: usize = 8;

/// Frequent entries from leaked-password corpora. Checked case-insensitively.
const COMMON_PASSWORDS: &[&str] = &[
    "password", "password1", "password123", "12345678", "123456789", "1234567890",
    "qwerty123", "qwertyuiop", "letmein1", "iloveyou", "sunshine", "princess",
    "football", "baseball", "welcome1", "admin123", "dragon123", "monkey123",
    "master123", "superman", "trustno1", "whatever", "passw0rd", "p@ssword",
];

/// Check a candidate password against the strength policy:
/// minimum length, not entirely numeric, not a common password, and not
/// too similar to the caller-supplied personal fields (email local-part,
/// first name, last name).
#[track_caller]
pub fn check_strength(password: &str, personal_fields: &[&str]) -> AuthErrorResult<()> {
    if password.chars().count() < PASSWORD_MIN {
        return Err(AuthError::WeakPassword {
            message: format!("must contain at least {} characters", PASSWORD_MIN),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if password.chars().all(|c| c.is_ascii_digit()) {
        return Err(AuthError::WeakPassword {
            message: "cannot be entirely numeric".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let lowered = password.to_lowercase();
    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return Err(AuthError::WeakPassword {
            message: "is too commonly used".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    for field in personal_fields {
        let field = field.to_lowercase();
        // Short fragments ("al", "li") would reject nearly everything
        if field.len() < 3 {
            continue;
        }
        if lowered.contains(&field) || field.contains(&lowered) {
            return Err(AuthError::WeakPassword {
                message: "is too similar to personal information".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    Ok(())
}
