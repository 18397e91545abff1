//! Email and phone format checks shared by every portal form.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// True when `value` has the shape `local@domain.tld` with no whitespace
/// and no second `@`.
///
/// Format check only; no DNS or mailbox verification is attempted.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// True when `value` reduces to exactly ten decimal digits after stripping
/// spaces, hyphens, and parentheses.
pub fn is_valid_phone(value: &str) -> bool {
    let mut digits = 0usize;
    for ch in value.chars() {
        match ch {
            ' ' | '-' | '(' | ')' => {}
            '0'..='9' => digits += 1,
            _ => return false,
        }
    }
    digits == 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("dr.house@clinic.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@b.com"));
        assert!(!is_valid_email("spaced user@b.com"));
        assert!(!is_valid_email("user@b .com"));
    }

    #[test]
    fn accepts_formatted_phone_numbers() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone("(123) 456-7890"));
        assert!(is_valid_phone("123 456 7890"));
    }

    #[test]
    fn rejects_wrong_digit_counts_and_garbage() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("(123) 456-789O"));
        assert!(!is_valid_phone("+1 123 456 7890"));
    }
}
