//! Notification sink abstraction used by the direct path and the relay server

use crate::error::SinkError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    pub id: Option<String>,
}

/// Sends one message to its recipients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, SinkError>;
}

/// Builds a sink bound to a caller-supplied credential.
#[cfg_attr(test, mockall::automock)]
pub trait SinkFactory: Send + Sync {
    fn connect(&self, credential: &str) -> Arc<dyn NotificationSink>;
}
