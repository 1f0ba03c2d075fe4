//! Integration tests for BankInfoRepository
mod common;

use crate::common::{create_test_pool, sample_customer};

use crm_core::BankInfo;
use crm_db::{BankInfoRepository, CustomerRepository};
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_find_round_trip() {
    let pool = create_test_pool().await;
    let repo = BankInfoRepository::new(pool);

    let bank_info = BankInfo::new(
        "First National".to_string(),
        "000123456789".to_string(),
        "FNBKUS33".to_string(),
    );
    repo.create(&bank_info).await.unwrap();

    let found = repo.find_by_id(bank_info.id).await.unwrap().unwrap();
    assert_eq!(found, bank_info);
}

#[tokio::test]
async fn test_find_unknown_returns_none() {
    let pool = create_test_pool().await;
    let repo = BankInfoRepository::new(pool);

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let pool = create_test_pool().await;
    let repo = BankInfoRepository::new(pool);

    let bank_info = BankInfo::new("Bank".to_string(), "1".to_string(), "CODE".to_string());
    repo.create(&bank_info).await.unwrap();

    assert!(repo.delete(bank_info.id).await.unwrap());
    assert!(!repo.delete(bank_info.id).await.unwrap());
}

#[tokio::test]
async fn test_deleting_bank_info_detaches_customer() {
    let pool = create_test_pool().await;
    let bank_repo = BankInfoRepository::new(pool.clone());
    let customer_repo = CustomerRepository::new(pool);

    let bank_info = BankInfo::new(
        "First National".to_string(),
        "000123456789".to_string(),
        "FNBKUS33".to_string(),
    );
    bank_repo.create(&bank_info).await.unwrap();

    let mut customer = sample_customer("alice@example.com", "+15551234567");
    customer.bank_info_id = Some(bank_info.id);
    customer_repo.create(&customer).await.unwrap();

    assert!(bank_repo.delete(bank_info.id).await.unwrap());

    // The customer survives with a nulled reference
    let found = customer_repo.find_by_id(customer.id).await.unwrap().unwrap();
    assert_eq!(found.bank_info_id, None);
    assert_eq!(found.email, "alice@example.com");
}
