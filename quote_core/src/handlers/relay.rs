//! The quote relay endpoint: validates a submission and forwards it as email

use crate::{
    error::{AppError, Result},
    extractors::RelayJson,
    models::{ApiResponse, RelayQuotePayload},
    transport::compose_quote_message,
    AppState,
};
use axum::{extract::State, response::IntoResponse, Json};
use tracing::{debug, info};
use validator::Validate;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";
pub const SUBMITTED_MESSAGE: &str = "Quote submitted successfully";

pub async fn handle_submit_quote(
    State(state): State<AppState>,
    RelayJson(payload): RelayJson<RelayQuotePayload>,
) -> Result<impl IntoResponse> {
    if let Err(errors) = payload.validate() {
        let fields: Vec<_> = errors.field_errors().keys().map(|k| k.to_string()).collect();
        debug!(?fields, "quote submission missing fields");
        return Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()));
    }

    let request = payload
        .into_quote_request()
        .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()))?;

    let message = compose_quote_message(&request, &state.sender);
    let receipt = state
        .sink
        .send(&message)
        .await
        .map_err(|e| AppError::Delivery(e.to_string()))?;

    info!(
        subject = %request.subject_name,
        id = ?receipt.id,
        "relayed quote request"
    );

    Ok(Json(ApiResponse::success_with_message(receipt, SUBMITTED_MESSAGE)))
}
