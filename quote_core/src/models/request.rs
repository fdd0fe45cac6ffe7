//! Request and response models for the relay endpoint

use super::quote::QuoteRequest;
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

const DEFAULT_CURRENCY: &str = "$";

/// Body accepted by the relay endpoint.
///
/// Every field is optional at the wire level so that missing fields surface
/// as a validation failure (400) instead of a deserialization rejection.
/// Field names used by older embeds are accepted as aliases.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RelayQuotePayload {
    #[serde(default, alias = "domainName")]
    #[validate(required(message = "subjectName is required"), length(min = 1))]
    pub subject_name: Option<String>,

    #[serde(default, alias = "sellerEmail")]
    #[validate(required(message = "recipientAddress is required"), length(min = 1))]
    pub recipient_address: Option<String>,

    #[serde(default, alias = "name")]
    #[validate(required(message = "buyerName is required"), length(min = 1))]
    pub buyer_name: Option<String>,

    #[serde(default, alias = "email")]
    #[validate(required(message = "buyerEmail is required"), length(min = 1))]
    pub buyer_email: Option<String>,

    #[serde(default, alias = "phone")]
    #[validate(required(message = "buyerPhone is required"), length(min = 1))]
    pub buyer_phone: Option<String>,

    #[serde(default, alias = "price", deserialize_with = "deserialize_offer_amount")]
    #[validate(required(message = "offerAmount is required"), range(min = 1))]
    pub offer_amount: Option<u64>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default, alias = "currency")]
    pub currency_symbol: Option<String>,
}

impl RelayQuotePayload {
    /// Converts a validated payload. Returns `None` if a required field is absent.
    pub fn into_quote_request(self) -> Option<QuoteRequest> {
        Some(QuoteRequest {
            subject_name: self.subject_name?,
            recipient_address: self.recipient_address?,
            buyer_name: self.buyer_name?,
            buyer_email: self.buyer_email?,
            buyer_phone: self.buyer_phone?,
            offer_amount: self.offer_amount?,
            message: self.message.filter(|m| !m.trim().is_empty()),
            currency_symbol: self
                .currency_symbol
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}

/// Range inputs post their value as a string, so accept both `5000` and `"5000"`.
fn deserialize_offer_amount<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => {
            if let Some(amount) = n.as_u64() {
                Ok(Some(amount))
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| Some(f.floor() as u64))
                    .ok_or_else(|| de::Error::custom("offerAmount must be a non-negative number"))
            }
        }
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<u64>()
                .map(Some)
                .or_else(|_| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| Some(f.floor() as u64))
                        .ok_or(())
                })
                .map_err(|_| de::Error::custom("offerAmount must be numeric"))
        }
        Some(_) => Err(de::Error::custom("offerAmount must be a number")),
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_payload_is_valid() {
        let payload: RelayQuotePayload = serde_json::from_value(json!({
            "subjectName": "premium-domain.com",
            "recipientAddress": "seller@example.com",
            "buyerName": "Ada",
            "buyerEmail": "ada@example.com",
            "buyerPhone": "555-123-4567",
            "offerAmount": 5000,
            "message": "",
            "currencySymbol": "€"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        let request = payload.into_quote_request().unwrap();
        assert_eq!(request.offer_amount, 5000);
        assert_eq!(request.currency_symbol, "€");
        assert!(request.message.is_none());
    }

    #[test]
    fn test_legacy_payload_with_string_price() {
        let payload: RelayQuotePayload = serde_json::from_value(json!({
            "domainName": "premium-domain.com",
            "sellerEmail": "seller@example.com",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": "555-123-4567",
            "price": "7500",
            "message": "Keen buyer"
        }))
        .unwrap();

        assert!(payload.validate().is_ok());
        let request = payload.into_quote_request().unwrap();
        assert_eq!(request.subject_name, "premium-domain.com");
        assert_eq!(request.offer_amount, 7500);
        assert_eq!(request.currency_symbol, "$");
        assert_eq!(request.message.as_deref(), Some("Keen buyer"));
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let payload: RelayQuotePayload = serde_json::from_value(json!({
            "subjectName": "premium-domain.com",
            "buyerName": "",
            "offerAmount": 0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("recipient_address"));
        assert!(fields.contains_key("buyer_name"));
        assert!(fields.contains_key("offer_amount"));
        assert!(!fields.contains_key("subject_name"));
    }

    #[test]
    fn test_non_numeric_price_is_rejected() {
        let result = serde_json::from_value::<RelayQuotePayload>(json!({ "price": "lots" }));
        assert!(result.is_err());
    }
}
