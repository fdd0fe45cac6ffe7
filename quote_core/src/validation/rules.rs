//! Field rules for buyer input

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[^\s@]+@[^\s@]+\.[^\s@]+$"
    ).unwrap();

    // Optional +, optional (area code), then 3-3-(4..6) digits with optional separators.
    static ref PHONE_REGEX: Regex = Regex::new(
        r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$"
    ).unwrap();
}

pub fn validate_buyer_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("name_required"));
    }
    Ok(())
}

pub fn validate_buyer_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::new("email_required"));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("email_format"));
    }

    Ok(())
}

pub fn validate_buyer_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.trim().is_empty() {
        return Err(ValidationError::new("phone_required"));
    }

    if !PHONE_REGEX.is_match(phone) {
        return Err(ValidationError::new("phone_format"));
    }

    Ok(())
}

pub fn validate_price_floor(amount: u64, floor: u64) -> Result<(), ValidationError> {
    if amount < floor {
        return Err(ValidationError::new("price_below_floor"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_validation() {
        assert!(validate_buyer_name("Ada Lovelace").is_ok());
        assert!(validate_buyer_name("").is_err());
        assert!(validate_buyer_name("   \t").is_err());
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_buyer_email("buyer@example.com").is_ok());
        assert!(validate_buyer_email("a.b+c@sub.domain.io").is_ok());
        assert!(validate_buyer_email("not-an-email").is_err());
        assert!(validate_buyer_email("missing@tld").is_err());
        assert!(validate_buyer_email("two words@example.com").is_err());
        assert!(validate_buyer_email(" buyer@example.com").is_err());
        assert!(validate_buyer_email("").is_err());
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_buyer_phone("5551234567").is_ok());
        assert!(validate_buyer_phone("555-123-4567").is_ok());
        assert!(validate_buyer_phone("555.123.4567").is_ok());
        assert!(validate_buyer_phone("(555) 123-4567").is_ok());
        assert!(validate_buyer_phone("+555 123 456789").is_ok());
        assert!(validate_buyer_phone("555-123-45").is_err());
        assert!(validate_buyer_phone("555-123-4567890").is_err());
        assert!(validate_buyer_phone("+1 555 123 4567").is_err());
        assert!(validate_buyer_phone("call me").is_err());
        assert!(validate_buyer_phone("").is_err());
    }

    #[test]
    fn test_price_floor() {
        assert!(validate_price_floor(500, 500).is_ok());
        assert!(validate_price_floor(10_000, 500).is_ok());
        assert!(validate_price_floor(499, 500).is_err());
    }
}
