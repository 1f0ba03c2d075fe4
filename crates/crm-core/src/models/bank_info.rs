//! Banking details optionally referenced by a customer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Banking details held separately from the customer record.
/// A customer references at most one BankInfo; deleting the BankInfo
/// nulls the reference and leaves the customer untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankInfo {
    pub id: Uuid,
    pub bank_name: String,
    pub account_number: String,
    /// SWIFT/IFSC-style routing code
    pub routing_code: String,
}

impl BankInfo {
    pub fn new(bank_name: String, account_number: String, routing_code: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank_name,
            account_number,
            routing_code,
        }
    }
}
