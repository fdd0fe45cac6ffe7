//! Backend selection and the single transport attempt per submission

use super::message::compose_quote_message;
use super::relay_client::RelayClient;
use super::sink::SinkFactory;
use super::{TransportConfig, TransportMode};
use crate::error::{SubmitError, TransportError};
use crate::models::QuoteRequest;
use std::sync::Arc;
use tracing::{debug, info};

pub type Outcome = std::result::Result<(), SubmitError>;

#[derive(Clone)]
pub struct SubmissionRouter {
    relay: Arc<dyn RelayClient>,
    sinks: Arc<dyn SinkFactory>,
    sender: String,
}

impl SubmissionRouter {
    pub fn new(
        relay: Arc<dyn RelayClient>,
        sinks: Arc<dyn SinkFactory>,
        sender: impl Into<String>,
    ) -> Self {
        Self {
            relay,
            sinks,
            sender: sender.into(),
        }
    }

    /// Performs exactly one transport call. No retries, and no fallback to
    /// the direct path when the relay fails.
    pub async fn submit(&self, request: &QuoteRequest, config: &TransportConfig) -> Outcome {
        match config.mode() {
            TransportMode::Relay(endpoint) => {
                debug!(endpoint, subject = %request.subject_name, "submitting quote through relay");
                self.relay.post_quote(endpoint, request).await?;
                info!(subject = %request.subject_name, "quote delivered to relay");
                Ok(())
            }
            TransportMode::Direct(credential) => {
                debug!(subject = %request.subject_name, "submitting quote directly to provider");
                let sink = self.sinks.connect(credential);
                let message = compose_quote_message(request, &self.sender);
                let receipt = sink.send(&message).await.map_err(TransportError::from)?;
                info!(subject = %request.subject_name, id = ?receipt.id, "quote delivered to provider");
                Ok(())
            }
            TransportMode::Unconfigured => Err(SubmitError::NotConfigured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SinkError;
    use crate::transport::relay_client::MockRelayClient;
    use crate::transport::sink::{DeliveryReceipt, MockNotificationSink, MockSinkFactory, NotificationSink};

    fn request() -> QuoteRequest {
        QuoteRequest {
            subject_name: "premium-domain.com".to_string(),
            recipient_address: "seller@example.com".to_string(),
            buyer_name: "Ada".to_string(),
            buyer_email: "ada@example.com".to_string(),
            buyer_phone: "555-123-4567".to_string(),
            offer_amount: 5000,
            message: None,
            currency_symbol: "$".to_string(),
        }
    }

    fn router(relay: MockRelayClient, sinks: MockSinkFactory) -> SubmissionRouter {
        SubmissionRouter::new(Arc::new(relay), Arc::new(sinks), "quotes@example.com")
    }

    #[tokio::test]
    async fn test_relay_preferred_over_credential() {
        let mut relay = MockRelayClient::new();
        relay
            .expect_post_quote()
            .withf(|endpoint, _| endpoint == "http://relay/api/submit-quote")
            .times(1)
            .returning(|_, _| Ok(()));
        let mut sinks = MockSinkFactory::new();
        sinks.expect_connect().never();

        let config = TransportConfig::new(
            Some("http://relay/api/submit-quote".to_string()),
            Some("re_123".to_string()),
        );
        assert!(router(relay, sinks).submit(&request(), &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_relay_failure_does_not_fall_back() {
        let mut relay = MockRelayClient::new();
        relay
            .expect_post_quote()
            .times(1)
            .returning(|_, _| Err(TransportError::Status(500)));
        let mut sinks = MockSinkFactory::new();
        sinks.expect_connect().never();

        let config = TransportConfig::new(Some("http://relay".to_string()), Some("re_123".to_string()));
        let err = router(relay, sinks).submit(&request(), &config).await.unwrap_err();
        assert_eq!(err.reason(), "transport-failure");
    }

    #[tokio::test]
    async fn test_direct_mode_sends_one_message() {
        let mut relay = MockRelayClient::new();
        relay.expect_post_quote().never();

        let mut sink = MockNotificationSink::new();
        sink.expect_send()
            .withf(|message| {
                message.to == vec!["seller@example.com".to_string()]
                    && message.subject == "New Quote Request for premium-domain.com"
                    && message.from == "quotes@example.com"
                    && message.html.contains("$5000")
            })
            .times(1)
            .returning(|_| Ok(DeliveryReceipt { id: Some("email_1".to_string()) }));

        let mut sinks = MockSinkFactory::new();
        sinks
            .expect_connect()
            .withf(|credential| credential == "re_123")
            .times(1)
            .return_once(move |_| Arc::new(sink) as Arc<dyn NotificationSink>);

        let config = TransportConfig::direct("re_123");
        assert!(router(relay, sinks).submit(&request(), &config).await.is_ok());
    }

    #[tokio::test]
    async fn test_sink_error_is_transport_failure() {
        let relay = MockRelayClient::new();
        let mut sink = MockNotificationSink::new();
        sink.expect_send().times(1).returning(|_| {
            Err(SinkError::Rejected {
                status: 403,
                body: "invalid key".to_string(),
            })
        });
        let mut sinks = MockSinkFactory::new();
        sinks
            .expect_connect()
            .return_once(move |_| Arc::new(sink) as Arc<dyn NotificationSink>);

        let err = router(relay, sinks)
            .submit(&request(), &TransportConfig::direct("re_bad"))
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Transport(TransportError::Sink(_))));
    }

    #[tokio::test]
    async fn test_unconfigured_performs_no_io() {
        let mut relay = MockRelayClient::new();
        relay.expect_post_quote().never();
        let mut sinks = MockSinkFactory::new();
        sinks.expect_connect().never();

        let err = router(relay, sinks)
            .submit(&request(), &TransportConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::NotConfigured));
        assert_eq!(err.reason(), "not-configured");
    }
}
