use crate::{Customer, Gender, MaritalStatus};

#[test]
fn test_customer_new() {
    let customer = Customer::new(
        "alice@example.com".to_string(),
        "Alice".to_string(),
        "Smith".to_string(),
    );

    assert_eq!(customer.email, "alice@example.com");
    assert_eq!(customer.first_name, "Alice");
    assert_eq!(customer.last_name, "Smith");
    assert_eq!(customer.gender, Gender::Unspecified);
    assert_eq!(customer.marital_status, MaritalStatus::Unspecified);
    assert!(customer.is_active);
    assert!(!customer.confirmed_email);
    assert!(!customer.is_staff);
    assert!(!customer.is_superuser);
    assert!(customer.password_hash.is_none());
    assert!(customer.bank_info_id.is_none());
    assert_eq!(customer.created_at, customer.updated_at);
}

#[test]
fn test_customer_ids_are_fresh() {
    let a = Customer::new("a@x.com".into(), "A".into(), "One".into());
    let b = Customer::new("b@x.com".into(), "B".into(), "Two".into());

    assert_ne!(a.id, b.id);
    assert_ne!(a.activation_key, b.activation_key);
    assert_ne!(a.id, a.activation_key);
}

#[test]
fn test_customer_full_name() {
    let customer = Customer::new("a@x.com".into(), "Alice".into(), "Smith".into());
    assert_eq!(customer.full_name(), "Alice Smith");
}

#[test]
fn test_customer_has_credentials() {
    let mut customer = Customer::new("a@x.com".into(), "Alice".into(), "Smith".into());
    assert!(!customer.has_credentials());

    customer.password_hash = Some("$argon2id$v=19$...".to_string());
    assert!(customer.has_credentials());
}
