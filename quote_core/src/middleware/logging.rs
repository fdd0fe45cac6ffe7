//! Request tracing for the relay server

use http::Request;
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, ServerErrorsFailureClass, SharedClassifier};
use tower_http::trace::{
    DefaultOnBodyChunk, DefaultOnEos, MakeSpan, OnFailure, OnRequest, OnResponse, TraceLayer,
};
use tracing::{info_span, Span};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default)]
pub struct RelaySpan;

impl<B> MakeSpan<B> for RelaySpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            path = %request.uri().path(),
            version = ?request.version(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogRequest;

impl<B> OnRequest<B> for LogRequest {
    fn on_request(&mut self, request: &Request<B>, _span: &Span) {
        tracing::debug!("started {} {}", request.method(), request.uri().path());
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &http::Response<B>, latency: Duration, _span: &Span) {
        let status = response.status();
        let latency_ms = latency.as_millis();

        if status.is_success() {
            tracing::info!(status = status.as_u16(), latency_ms, "request completed");
        } else if status.is_client_error() {
            tracing::warn!(status = status.as_u16(), latency_ms, "client error response");
        } else {
            tracing::error!(status = status.as_u16(), latency_ms, "server error response");
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogFailure;

impl OnFailure<ServerErrorsFailureClass> for LogFailure {
    fn on_failure(&mut self, error: ServerErrorsFailureClass, latency: Duration, _span: &Span) {
        tracing::error!(latency_ms = latency.as_millis(), error = %error, "request failed");
    }
}

pub type RelayTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    RelaySpan,
    LogRequest,
    LogResponse,
    DefaultOnBodyChunk,
    DefaultOnEos,
    LogFailure,
>;

pub fn logging_layer() -> RelayTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(RelaySpan)
        .on_request(LogRequest)
        .on_response(LogResponse)
        .on_failure(LogFailure)
}
