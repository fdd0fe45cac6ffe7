//! Presentation model derived from controller state

use crate::config::FormConfig;
use crate::models::{FieldState, SubmissionStatus};
use serde::Serialize;

pub const SUBMIT_LABEL: &str = "Submit Quote Request";
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Where a failure message is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPlacement {
    /// Under the fields; used for validation failures.
    Inline,
    /// The dedicated error panel above the form; used for delivery failures.
    Panel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPanel {
    pub heading: String,
    pub fields: FieldState,
    pub offer_label: String,
    pub min_label: String,
    pub max_label: String,
    pub price_floor: u64,
    pub price_ceiling: u64,
    pub inline_error: Option<String>,
    pub panel_error: Option<String>,
    pub fields_disabled: bool,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum FormView {
    Editing(FormPanel),
    Submitting(FormPanel),
    Succeeded { confirmation: String },
}

impl FormView {
    pub(crate) fn build(
        config: &FormConfig,
        fields: &FieldState,
        status: &SubmissionStatus,
        placement: Option<ErrorPlacement>,
    ) -> Self {
        if let SubmissionStatus::Succeeded = status {
            return FormView::Succeeded {
                confirmation: format!(
                    "Your quote for {} has been submitted successfully! We'll be in touch soon.",
                    config.subject_name
                ),
            };
        }

        let submitting = matches!(status, SubmissionStatus::Submitting);
        let error = status.error_message().map(str::to_string);
        let (inline_error, panel_error) = match placement {
            Some(ErrorPlacement::Panel) => (None, error),
            _ => (error, None),
        };

        let panel = FormPanel {
            heading: format!("Request Quote for {}", config.subject_name),
            fields: fields.clone(),
            offer_label: format!("Your Offer: {}{}", config.currency_symbol, fields.offer_amount),
            min_label: format!("{}{}", config.currency_symbol, config.price_floor),
            max_label: format!("{}{}", config.currency_symbol, config.price_ceiling),
            price_floor: config.price_floor,
            price_ceiling: config.price_ceiling,
            inline_error,
            panel_error,
            fields_disabled: submitting,
            submit_label: if submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL },
        };

        if submitting {
            FormView::Submitting(panel)
        } else {
            FormView::Editing(panel)
        }
    }
}
