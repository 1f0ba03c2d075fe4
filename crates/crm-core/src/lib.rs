pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::bank_info::BankInfo;
pub use models::customer::Customer;
pub use models::gender::Gender;
pub use models::marital_status::MaritalStatus;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
