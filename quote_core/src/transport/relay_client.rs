//! HTTP client for the server-side relay endpoint

use crate::error::TransportError;
use crate::models::QuoteRequest;
use async_trait::async_trait;
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayClient: Send + Sync {
    /// POSTs the request as JSON. Any 2xx is success.
    async fn post_quote(&self, endpoint: &str, request: &QuoteRequest) -> Result<(), TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestRelayClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestRelayClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ReqwestRelayClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RelayClient for ReqwestRelayClient {
    async fn post_quote(&self, endpoint: &str, request: &QuoteRequest) -> Result<(), TransportError> {
        let mut builder = self
            .client
            .post(endpoint)
            .header("Content-Type", "application/json")
            .json(request);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await?;

        if resp.status().is_success() {
            tracing::debug!(endpoint, status = resp.status().as_u16(), "relay accepted quote");
            Ok(())
        } else {
            Err(TransportError::Status(resp.status().as_u16()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> QuoteRequest {
        QuoteRequest {
            subject_name: "premium-domain.com".to_string(),
            recipient_address: "seller@example.com".to_string(),
            buyer_name: "Ada".to_string(),
            buyer_email: "ada@example.com".to_string(),
            buyer_phone: "555-123-4567".to_string(),
            offer_amount: 5000,
            message: Some("Hello".to_string()),
            currency_symbol: "$".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/submit-quote"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(serde_json::json!({
                "subjectName": "premium-domain.com",
                "recipientAddress": "seller@example.com",
                "buyerName": "Ada",
                "buyerEmail": "ada@example.com",
                "buyerPhone": "555-123-4567",
                "offerAmount": 5000,
                "message": "Hello",
                "currencySymbol": "$"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ReqwestRelayClient::new();
        let endpoint = format!("{}/api/submit-quote", server.uri());
        assert!(client.post_quote(&endpoint, &request()).await.is_ok());
    }

    #[tokio::test]
    async fn test_server_error_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ReqwestRelayClient::new();
        let err = client.post_quote(&server.uri(), &request()).await.unwrap_err();
        assert!(matches!(err, TransportError::Status(500)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let client = ReqwestRelayClient::new().with_timeout(Duration::from_secs(2));
        let err = client
            .post_quote("http://127.0.0.1:9/api/submit-quote", &request())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }
}
