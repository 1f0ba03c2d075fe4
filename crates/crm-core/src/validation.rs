//! Field-level validation shared by the registration and record forms.

use std::sync::LazyLock;

use regex::Regex;

/// Optional leading "+", optional literal "1", then 9-15 digits total.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?1?\d{9,15}$").expect("compile phone regex"));

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("compile email regex")
});

const EMAIL_MAX: usize = 254;

/// Lowercase and trim an email before it touches storage or a uniqueness
/// probe. Lookups go through the same function so "Bob@X.COM " and
/// "bob@x.com" hit the same row.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email) && email.len() <= EMAIL_MAX
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, is_valid_phone_number, normalize_email};

    #[test]
    fn test_is_valid_phone_number() {
        assert!(is_valid_phone_number("+15551234567"));
        assert!(is_valid_phone_number("15551234567"));
        assert!(is_valid_phone_number("999999999"));
        assert!(is_valid_phone_number("+1999999999999999"));

        assert!(!is_valid_phone_number(""));
        assert!(!is_valid_phone_number("abc"));
        assert!(!is_valid_phone_number("+1555"));
        assert!(!is_valid_phone_number("555-123-4567"));
        assert!(!is_valid_phone_number("+12345678901234567"));
        assert!(!is_valid_phone_number("+15551234567 "));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("bob@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld@twice.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email(" Bob@X.COM "), "bob@x.com");
        assert_eq!(normalize_email("already@lower.com"), "already@lower.com");
    }
}
