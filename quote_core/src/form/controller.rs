//! The quote form state machine
//!
//! `FormController` is a cheap cloneable handle. Event handlers hold the lock
//! only between suspension points; the transport call runs unlocked while the
//! `Submitting` status itself keeps a second submission out.

use super::view::{ErrorPlacement, FormView};
use crate::config::FormConfig;
use crate::error::{AppError, Result, SubmitError};
use crate::models::{FieldName, FieldState, QuoteRequest, SubmissionStatus};
use crate::style::{self, StyleOverrides, StyleTokens};
use crate::transport::{
    ReqwestRelayClient, ResendSinkFactory, SubmissionRouter, TransportConfig,
};
use crate::validation::{validate, ValidationResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to send quote. Please try again later.";

const STATUS_CHANNEL_CAPACITY: usize = 16;

/// What a submit intent ended up doing.
#[derive(Debug)]
pub enum SubmitDisposition {
    /// Another submission is in flight, the form already succeeded, or the
    /// controller was disposed.
    Ignored,
    /// Validation failed; no transport was contacted.
    Rejected(String),
    Delivered,
    Failed(SubmitError),
    /// The outcome arrived after `dispose()` and was dropped.
    Discarded,
}

#[derive(Debug)]
struct FormInner {
    fields: FieldState,
    status: SubmissionStatus,
    error_placement: Option<ErrorPlacement>,
}

#[derive(Clone)]
pub struct FormController {
    inner: Arc<Mutex<FormInner>>,
    config: Arc<FormConfig>,
    overrides: Arc<StyleOverrides>,
    transport: TransportConfig,
    router: SubmissionRouter,
    status_tx: broadcast::Sender<SubmissionStatus>,
    disposed: Arc<AtomicBool>,
}

impl FormController {
    pub fn new(config: FormConfig, router: SubmissionRouter) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        let (overrides, ignored) = StyleOverrides::from_raw(&config.style_overrides);
        if !ignored.is_empty() {
            warn!(keys = ?ignored, "Ignoring unknown style override keys");
        }

        let (status_tx, _) = broadcast::channel(STATUS_CHANNEL_CAPACITY);

        Ok(Self {
            inner: Arc::new(Mutex::new(FormInner {
                fields: FieldState::with_defaults(config.price_floor, config.price_ceiling),
                status: SubmissionStatus::Idle,
                error_placement: None,
            })),
            transport: config.transport(),
            overrides: Arc::new(overrides),
            config: Arc::new(config),
            router,
            status_tx,
            disposed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Wires the reqwest relay client and the Resend provider. The optional
    /// request timeout applies to both paths.
    pub fn from_config(config: FormConfig) -> Result<Self> {
        let mut relay = ReqwestRelayClient::new();
        let mut sinks = ResendSinkFactory::new(config.provider_base_url.clone());
        if let Some(seconds) = config.request_timeout_seconds {
            let timeout = Duration::from_secs(seconds);
            relay = relay.with_timeout(timeout);
            sinks = sinks.with_timeout(timeout);
        }
        let router = SubmissionRouter::new(
            Arc::new(relay),
            Arc::new(sinks),
            config.sender_address.clone(),
        );
        Self::new(config, router)
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn status(&self) -> SubmissionStatus {
        self.inner.lock().status.clone()
    }

    pub fn fields(&self) -> FieldState {
        self.inner.lock().fields.clone()
    }

    /// Receives every status transition after the call.
    pub fn subscribe(&self) -> broadcast::Receiver<SubmissionStatus> {
        self.status_tx.subscribe()
    }

    /// Applies a field edit. Returns `false` when the edit was not applied:
    /// the form is not editable, or an offer value is not numeric.
    pub fn on_field_change(&self, field: FieldName, value: &str) -> bool {
        let mut inner = self.inner.lock();
        if !inner.status.is_editable() {
            debug!(%field, status = ?inner.status, "field edit ignored");
            return false;
        }

        match field {
            FieldName::BuyerName => inner.fields.buyer_name = value.to_string(),
            FieldName::BuyerEmail => inner.fields.buyer_email = value.to_string(),
            FieldName::BuyerPhone => inner.fields.buyer_phone = value.to_string(),
            FieldName::Message => inner.fields.message = value.to_string(),
            FieldName::OfferAmount => match value.trim().parse::<u64>() {
                // Same bound as the range control; the floor is left to validation.
                Ok(amount) => inner.fields.offer_amount = amount.min(self.config.price_ceiling),
                Err(_) => {
                    debug!(value, "non-numeric offer ignored");
                    return false;
                }
            },
        }
        true
    }

    pub async fn on_submit_intent(&self) -> SubmitDisposition {
        if self.is_disposed() {
            return SubmitDisposition::Ignored;
        }

        let request = {
            let mut inner = self.inner.lock();
            if !inner.status.is_editable() {
                debug!(status = ?inner.status, "submit intent ignored");
                return SubmitDisposition::Ignored;
            }
            inner.error_placement = None;

            let result = validate(
                &inner.fields,
                self.config.price_floor,
                &self.config.currency_symbol,
            );
            if let ValidationResult::Invalid(message) = result {
                debug!(%message, "quote form failed validation");
                self.transition(
                    &mut inner,
                    SubmissionStatus::Failed(message.clone()),
                    Some(ErrorPlacement::Inline),
                );
                return SubmitDisposition::Rejected(message);
            }

            self.transition(&mut inner, SubmissionStatus::Submitting, None);
            QuoteRequest::from_fields(
                &inner.fields,
                &self.config.subject_name,
                &self.config.recipient_address,
                &self.config.currency_symbol,
            )
        };

        let outcome = self.router.submit(&request, &self.transport).await;

        if self.is_disposed() {
            debug!(subject = %request.subject_name, ok = outcome.is_ok(), "dropping outcome for disposed form");
            return SubmitDisposition::Discarded;
        }

        let mut inner = self.inner.lock();
        match outcome {
            Ok(()) => {
                info!(subject = %request.subject_name, "quote submitted");
                inner.fields =
                    FieldState::with_defaults(self.config.price_floor, self.config.price_ceiling);
                self.transition(&mut inner, SubmissionStatus::Succeeded, None);
                SubmitDisposition::Delivered
            }
            Err(err) => {
                match &err {
                    SubmitError::NotConfigured => error!(
                        subject = %request.subject_name,
                        reason = err.reason(),
                        "quote form has no endpoint URL or provider credential configured"
                    ),
                    SubmitError::Transport(cause) => warn!(
                        subject = %request.subject_name,
                        reason = err.reason(),
                        cause = %cause,
                        "Error sending quote"
                    ),
                }
                self.transition(
                    &mut inner,
                    SubmissionStatus::Failed(TRANSPORT_FAILURE_MESSAGE.to_string()),
                    Some(ErrorPlacement::Panel),
                );
                SubmitDisposition::Failed(err)
            }
        }
    }

    pub fn styles(&self) -> StyleTokens {
        style::resolve(&self.config.theme_name, &self.overrides)
    }

    pub fn view(&self) -> FormView {
        let inner = self.inner.lock();
        FormView::build(
            &self.config,
            &inner.fields,
            &inner.status,
            inner.error_placement,
        )
    }

    /// Marks the form as unmounted. Late outcomes are dropped.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    fn transition(
        &self,
        inner: &mut FormInner,
        status: SubmissionStatus,
        placement: Option<ErrorPlacement>,
    ) {
        debug!(from = ?inner.status, to = ?status, "quote form transition");
        inner.status = status.clone();
        inner.error_placement = placement;
        // No subscribers is fine.
        let _ = self.status_tx.send(status);
    }
}
