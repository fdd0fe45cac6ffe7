//! Client-side validation of the quote form
//!
//! Rules run in a fixed order and only the first failure is reported, since
//! the form shows one message at a time. There is deliberately no upper-bound
//! check on the offer here; see `FormController::on_field_change`.

pub mod rules;

pub use rules::*;

use crate::models::FieldState;
use serde::{Deserialize, Serialize};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Valid email is required";
pub const PHONE_REQUIRED: &str = "Valid phone number is required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

pub fn validate(fields: &FieldState, price_floor: u64, currency_symbol: &str) -> ValidationResult {
    if validate_buyer_name(&fields.buyer_name).is_err() {
        return ValidationResult::Invalid(NAME_REQUIRED.to_string());
    }

    if validate_buyer_email(&fields.buyer_email).is_err() {
        return ValidationResult::Invalid(EMAIL_REQUIRED.to_string());
    }

    if validate_buyer_phone(&fields.buyer_phone).is_err() {
        return ValidationResult::Invalid(PHONE_REQUIRED.to_string());
    }

    if validate_price_floor(fields.offer_amount, price_floor).is_err() {
        return ValidationResult::Invalid(format!(
            "Price must be at least {}{}",
            currency_symbol, price_floor
        ));
    }

    ValidationResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FieldState {
        FieldState {
            buyer_name: "Ada Lovelace".to_string(),
            buyer_email: "ada@example.com".to_string(),
            buyer_phone: "555-123-4567".to_string(),
            offer_amount: 5000,
            message: String::new(),
        }
    }

    #[test]
    fn test_valid_fields_pass() {
        assert_eq!(validate(&valid_fields(), 100, "$"), ValidationResult::Valid);
    }

    #[test]
    fn test_empty_form_reports_name_first() {
        let fields = FieldState::with_defaults(100, 10000);
        assert_eq!(
            validate(&fields, 100, "$"),
            ValidationResult::Invalid(NAME_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_bad_email_wins_over_later_rules() {
        let fields = FieldState {
            buyer_email: "not-an-email".to_string(),
            buyer_phone: "nope".to_string(),
            offer_amount: 1,
            ..valid_fields()
        };
        assert_eq!(
            validate(&fields, 500, "$"),
            ValidationResult::Invalid(EMAIL_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_bad_phone_reported_before_price() {
        let fields = FieldState {
            buyer_phone: "12".to_string(),
            offer_amount: 1,
            ..valid_fields()
        };
        assert_eq!(
            validate(&fields, 500, "$"),
            ValidationResult::Invalid(PHONE_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_price_below_floor_names_the_floor() {
        let fields = FieldState {
            offer_amount: 499,
            ..valid_fields()
        };
        let result = validate(&fields, 500, "€");
        assert_eq!(
            result,
            ValidationResult::Invalid("Price must be at least €500".to_string())
        );
    }

    #[test]
    fn test_no_upper_bound() {
        let fields = FieldState {
            offer_amount: u64::MAX,
            ..valid_fields()
        };
        assert!(validate(&fields, 500, "$").is_valid());
    }
}
