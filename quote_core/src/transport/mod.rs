//! Delivery of quote requests: relay endpoint or direct notification sink

pub mod message;
pub mod relay_client;
pub mod resend;
pub mod router;
pub mod sink;

pub use message::compose_quote_message;
pub use relay_client::{RelayClient, ReqwestRelayClient};
pub use resend::{ResendSink, ResendSinkFactory};
pub use router::{Outcome, SubmissionRouter};
pub use sink::{DeliveryReceipt, NotificationMessage, NotificationSink, SinkFactory};

/// Which delivery backends the embedding caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportConfig {
    endpoint_url: Option<String>,
    provider_credential: Option<String>,
}

/// The backend a submission will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode<'a> {
    Relay(&'a str),
    Direct(&'a str),
    Unconfigured,
}

impl TransportConfig {
    /// Blank values count as absent.
    pub fn new(endpoint_url: Option<String>, provider_credential: Option<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.filter(|url| !url.trim().is_empty()),
            provider_credential: provider_credential.filter(|key| !key.trim().is_empty()),
        }
    }

    pub fn relay(endpoint_url: impl Into<String>) -> Self {
        Self::new(Some(endpoint_url.into()), None)
    }

    pub fn direct(provider_credential: impl Into<String>) -> Self {
        Self::new(None, Some(provider_credential.into()))
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self.mode(), TransportMode::Unconfigured)
    }

    /// Relay is preferred whenever an endpoint is present.
    pub fn mode(&self) -> TransportMode<'_> {
        match (&self.endpoint_url, &self.provider_credential) {
            (Some(url), _) => TransportMode::Relay(url),
            (None, Some(credential)) => TransportMode::Direct(credential),
            (None, None) => TransportMode::Unconfigured,
        }
    }
}
