use crate::{Gender, MaritalStatus};

use std::str::FromStr;

#[test]
fn test_gender_round_trip() {
    for g in [Gender::Unspecified, Gender::Male, Gender::Female] {
        assert_eq!(Gender::from_str(g.as_str()).unwrap(), g);
    }
}

#[test]
fn test_gender_rejects_unknown() {
    assert!(Gender::from_str("other").is_err());
    assert!(Gender::from_str("").is_err());
    assert!(Gender::from_str("Male").is_err());
}

#[test]
fn test_marital_status_round_trip() {
    for m in [
        MaritalStatus::Unspecified,
        MaritalStatus::Single,
        MaritalStatus::Divorced,
        MaritalStatus::Widowed,
        MaritalStatus::Married,
    ] {
        assert_eq!(MaritalStatus::from_str(m.as_str()).unwrap(), m);
    }
}

#[test]
fn test_marital_status_rejects_unknown() {
    assert!(MaritalStatus::from_str("engaged").is_err());
    assert!(MaritalStatus::from_str("").is_err());
}

#[test]
fn test_defaults_are_unspecified() {
    assert_eq!(Gender::default(), Gender::Unspecified);
    assert_eq!(MaritalStatus::default(), MaritalStatus::Unspecified);
}
