pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::bank_info_repository::BankInfoRepository;
pub use repositories::customer_repository::CustomerRepository;
