//! Quote request, form field state and submission status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A buyer's offer, built fresh from the field state on every submit attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub subject_name: String,
    pub recipient_address: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: String,
    pub offer_amount: u64,
    pub message: Option<String>,
    pub currency_symbol: String,
}

impl QuoteRequest {
    pub fn from_fields(
        fields: &FieldState,
        subject_name: &str,
        recipient_address: &str,
        currency_symbol: &str,
    ) -> Self {
        let message = if fields.message.trim().is_empty() {
            None
        } else {
            Some(fields.message.clone())
        };

        Self {
            subject_name: subject_name.to_string(),
            recipient_address: recipient_address.to_string(),
            buyer_name: fields.buyer_name.clone(),
            buyer_email: fields.buyer_email.clone(),
            buyer_phone: fields.buyer_phone.clone(),
            offer_amount: fields.offer_amount,
            message,
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Offer rendered with its currency symbol, e.g. `$5050`.
    pub fn formatted_offer(&self) -> String {
        format!("{}{}", self.currency_symbol, self.offer_amount)
    }
}

/// Values the buyer has typed so far.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState {
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_phone: String,
    pub offer_amount: u64,
    pub message: String,
}

impl FieldState {
    /// Empty text fields with the offer at the midpoint of the price range.
    pub fn with_defaults(price_floor: u64, price_ceiling: u64) -> Self {
        Self {
            offer_amount: midpoint(price_floor, price_ceiling),
            ..Default::default()
        }
    }
}

fn midpoint(floor: u64, ceiling: u64) -> u64 {
    floor / 2 + ceiling / 2 + (floor % 2 + ceiling % 2) / 2
}

/// Editable form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    BuyerName,
    BuyerEmail,
    BuyerPhone,
    OfferAmount,
    Message,
}

impl FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "buyerName" | "name" => Ok(FieldName::BuyerName),
            "buyerEmail" | "email" => Ok(FieldName::BuyerEmail),
            "buyerPhone" | "phone" => Ok(FieldName::BuyerPhone),
            "offerAmount" | "price" => Ok(FieldName::OfferAmount),
            "message" => Ok(FieldName::Message),
            other => Err(format!("unknown form field '{}'", other)),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldName::BuyerName => "buyerName",
            FieldName::BuyerEmail => "buyerEmail",
            FieldName::BuyerPhone => "buyerPhone",
            FieldName::OfferAmount => "offerAmount",
            FieldName::Message => "message",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    /// Whether field edits and new submissions are accepted.
    pub fn is_editable(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
