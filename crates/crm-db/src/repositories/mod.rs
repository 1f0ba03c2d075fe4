pub mod bank_info_repository;
pub mod customer_repository;
