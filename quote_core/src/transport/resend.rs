//! Transactional email sink backed by the Resend HTTP API

use super::sink::{DeliveryReceipt, NotificationMessage, NotificationSink, SinkFactory};
use crate::error::SinkError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct ResendSink {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl ResendSink {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_key, base_url)
    }

    pub fn with_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// Bounds each provider call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl std::fmt::Debug for ResendSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendSink")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl NotificationSink for ResendSink {
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, SinkError> {
        let mut builder = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(message);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        // Already accepted; only the id is lost.
        let receipt = match resp.json::<DeliveryReceipt>().await {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(error = %e, to = ?message.to, "unreadable provider reply");
                DeliveryReceipt::default()
            }
        };
        tracing::info!(id = ?receipt.id, to = ?message.to, "email accepted by provider");
        Ok(receipt)
    }
}

/// Builds `ResendSink`s for credentials supplied at submit time.
#[derive(Debug, Clone)]
pub struct ResendSinkFactory {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl ResendSinkFactory {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl SinkFactory for ResendSinkFactory {
    fn connect(&self, credential: &str) -> Arc<dyn NotificationSink> {
        let mut sink = ResendSink::with_client(self.client.clone(), credential, self.base_url.clone());
        if let Some(timeout) = self.timeout {
            sink = sink.with_timeout(timeout);
        }
        Arc::new(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{bearer_token, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn message() -> NotificationMessage {
        NotificationMessage {
            from: "Domain Quote <onboarding@resend.dev>".to_string(),
            to: vec!["seller@example.com".to_string()],
            subject: "New Quote Request for premium-domain.com".to_string(),
            html: "<h2>New Domain Quote Request</h2>".to_string(),
            text: "New Domain Quote Request".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_returns_provider_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(bearer_token("re_test_key"))
            .and(body_partial_json(serde_json::json!({
                "to": ["seller@example.com"],
                "subject": "New Quote Request for premium-domain.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "email_123" })))
            .expect(1)
            .mount(&server)
            .await;

        let sink = ResendSink::new("re_test_key", format!("{}/", server.uri()));
        let receipt = sink.send(&message()).await.unwrap();
        assert_eq!(receipt.id.as_deref(), Some("email_123"));
    }

    #[tokio::test]
    async fn test_provider_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid from address"))
            .mount(&server)
            .await;

        let sink = ResendSinkFactory::new(server.uri()).connect("re_test_key");
        let err = sink.send(&message()).await.unwrap_err();
        match err {
            SinkError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "invalid from address");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreadable_reply_still_delivered() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(200).set_body_string("queued"))
            .mount(&server)
            .await;

        let receipt = ResendSink::new("re_test_key", server.uri())
            .send(&message())
            .await
            .unwrap();
        assert!(receipt.id.is_none());
    }

    #[tokio::test]
    async fn test_factory_timeout_applies_to_sinks() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "id": "email_late" }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let sink = ResendSinkFactory::new(server.uri())
            .with_timeout(Duration::from_millis(200))
            .connect("re_test_key");
        let err = sink.send(&message()).await.unwrap_err();
        assert!(matches!(err, SinkError::Request(_)));
    }

    #[test]
    fn test_debug_redacts_key() {
        let sink = ResendSink::new("re_secret", "https://api.resend.com");
        let debug = format!("{:?}", sink);
        assert!(!debug.contains("re_secret"));
    }
}
