//! Error types for quote submission and the relay server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Configuration(msg) => {
                tracing::error!("Relay misconfigured: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::Delivery(msg) => {
                tracing::error!("Error sending email: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to send email".to_string())
            }
            AppError::IoError(err) => {
                tracing::error!("IO error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

/// Failure of a single transport attempt.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("endpoint responded with HTTP {0}")]
    Status(u16),

    #[error("network failure: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("notification sink failed: {0}")]
    Sink(#[from] SinkError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TransportError::MalformedResponse(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

/// Error reported by a notification sink.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("provider rejected message with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("provider request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for SinkError {
    fn from(err: reqwest::Error) -> Self {
        SinkError::Request(err.to_string())
    }
}

/// The `Err` side of a submission outcome.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("not-configured")]
    NotConfigured,

    #[error("transport-failure")]
    Transport(#[from] TransportError),
}

impl SubmitError {
    /// Short reason code used in operator logs.
    pub fn reason(&self) -> &'static str {
        match self {
            SubmitError::NotConfigured => "not-configured",
            SubmitError::Transport(_) => "transport-failure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_reasons() {
        assert_eq!(SubmitError::NotConfigured.reason(), "not-configured");
        assert_eq!(
            SubmitError::Transport(TransportError::Status(500)).reason(),
            "transport-failure"
        );
        assert_eq!(SubmitError::NotConfigured.to_string(), "not-configured");
    }

    #[test]
    fn test_sink_error_converts_to_transport_error() {
        let err: TransportError = SinkError::Request("timeout".to_string()).into();
        assert!(matches!(err, TransportError::Sink(_)));
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_delivery_error_hides_details() {
        let response = AppError::Delivery("provider key revoked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_bad_request_status() {
        let response = AppError::BadRequest("Missing required fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
