//! Common validation utilities

use base64::Engine;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

// Standard address shape: local@domain.tld, no whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Optional leading +, then at least ten digits/spaces/dashes
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[\d\s-]{10,}$").unwrap());

/// Check if a string is non-empty after trimming
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if an email address matches the standard pattern
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check if a phone number matches the accepted format
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Parse a calendar date in `YYYY-MM-DD` form
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Check whether a string is a plausible base64 image payload
///
/// Accepts both a raw base64 string and a `data:<mime>;base64,` data URI,
/// which is what browser uploads produce.
pub fn is_plausible_base64_image(data: &str) -> bool {
    let payload = match data.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        Some(_) => return false,
        None => data,
    };
    !payload.is_empty()
        && base64::engine::general_purpose::STANDARD
            .decode(payload)
            .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("spaces in@address.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+1 555-123-4567"));
        assert!(is_valid_phone("0123456789"));
        assert!(is_valid_phone("123 456 7890"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("abc-def-ghij"));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-06-01"),
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(parse_date(" 2024-06-01 "), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert!(parse_date("06/01/2024").is_none());
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("2024-13-40").is_none());
    }

    #[test]
    fn test_is_plausible_base64_image() {
        assert!(is_plausible_base64_image("aGVsbG8="));
        assert!(is_plausible_base64_image("data:image/png;base64,aGVsbG8="));
        assert!(!is_plausible_base64_image(""));
        assert!(!is_plausible_base64_image("data:image/png;base64,"));
        assert!(!is_plausible_base64_image("not base64!!"));
    }
}
