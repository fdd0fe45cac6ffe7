//! Core library for the domain quote form: the submission state machine,
//! its transports, and the relay server that forwards quotes as email.

pub mod config;
pub mod error;
pub mod extractors;
pub mod form;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod style;
pub mod transport;
pub mod validation;

pub use config::{AppConfig, FormConfig};
pub use error::{AppError, Result, SubmitError, TransportError};
pub use form::{FormController, FormView, SubmitDisposition};
pub use handlers::routes::create_routes;
pub use middleware::cors::cors_layer_from_config;
pub use models::{FieldName, FieldState, QuoteRequest, SubmissionStatus};
pub use style::{StyleOverrides, StyleSlot, StyleTokens};
pub use transport::{NotificationSink, ResendSink, SubmissionRouter, TransportConfig};
pub use validation::ValidationResult;

use axum::Router;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub sink: Arc<dyn NotificationSink>,
    pub sender: String,
}

impl AppState {
    pub fn new(sink: Arc<dyn NotificationSink>, sender: impl Into<String>) -> Self {
        Self {
            app_name: "Quote Relay".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            sink,
            sender: sender.into(),
        }
    }

    /// Relay state backed by the configured email provider.
    pub fn from_config(config: &AppConfig) -> Self {
        let sink = ResendSink::new(config.provider.api_key.clone(), config.provider.base_url.clone());
        Self::new(Arc::new(sink), config.relay.sender_address.clone())
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .merge(create_routes(&config.relay.path))
        .layer(cors_layer_from_config(&config.cors))
        .layer(middleware::logging::logging_layer())
        .with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting quote relay on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
