use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Deliberately does not say which factor failed
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Password confirmation does not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Weak password: {message} {location}")]
    WeakPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to hash password {location}")]
    Hash { location: ErrorLocation },

    #[error("Stored password hash is malformed: {message} {location}")]
    InvalidHash {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
