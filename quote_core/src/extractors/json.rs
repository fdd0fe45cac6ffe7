//! JSON extractor that answers malformed bodies with the relay's error shape

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

pub struct RelayJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for RelayJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RelayJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(RelayJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected relay body");
                Err(RelayJsonRejection::from(rejection))
            }
        }
    }
}

#[derive(Debug)]
pub enum RelayJsonRejection {
    MissingContentType,
    Syntax(String),
    Data(String),
    Other(String),
}

impl From<JsonRejection> for RelayJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => RelayJsonRejection::MissingContentType,
            JsonRejection::JsonSyntaxError(e) => RelayJsonRejection::Syntax(e.body_text()),
            JsonRejection::JsonDataError(e) => RelayJsonRejection::Data(e.body_text()),
            other => RelayJsonRejection::Other(other.body_text()),
        }
    }
}

impl IntoResponse for RelayJsonRejection {
    fn into_response(self) -> Response {
        let message = match &self {
            RelayJsonRejection::MissingContentType => "Expected a JSON request body",
            RelayJsonRejection::Syntax(msg) if msg.contains("EOF while parsing") => {
                "Empty or incomplete JSON request"
            }
            RelayJsonRejection::Syntax(_) => "Invalid JSON format",
            // Wrong types for known fields are treated like missing ones.
            RelayJsonRejection::Data(_) => "Missing required fields",
            RelayJsonRejection::Other(_) => "Failed to parse JSON request",
        };
        let status = StatusCode::BAD_REQUEST;

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl std::fmt::Display for RelayJsonRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelayJsonRejection::MissingContentType => write!(f, "Missing JSON content type"),
            RelayJsonRejection::Syntax(msg) => write!(f, "Invalid JSON: {}", msg),
            RelayJsonRejection::Data(msg) => write!(f, "Invalid JSON data: {}", msg),
            RelayJsonRejection::Other(msg) => write!(f, "JSON error: {}", msg),
        }
    }
}

impl std::error::Error for RelayJsonRejection {}
