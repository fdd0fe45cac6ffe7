use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::transport::TransportConfig;

pub const DEFAULT_SENDER: &str = "Domain Quote <onboarding@resend.dev>";
pub const DEFAULT_PROVIDER_URL: &str = "https://api.resend.com";

/// Options an embedding caller passes to the quote form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub subject_name: String,
    pub recipient_address: String,
    pub price_floor: u64,
    pub price_ceiling: u64,
    pub endpoint_url: Option<String>,
    pub provider_credential: Option<String>,
    pub currency_symbol: String,
    pub theme_name: String,
    pub style_overrides: HashMap<String, String>,
    pub sender_address: String,
    pub provider_base_url: String,
    pub request_timeout_seconds: Option<u64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            subject_name: String::new(),
            recipient_address: String::new(),
            price_floor: 100,
            price_ceiling: 10000,
            endpoint_url: None,
            provider_credential: None,
            currency_symbol: "$".to_string(),
            theme_name: "light".to_string(),
            style_overrides: HashMap::new(),
            sender_address: DEFAULT_SENDER.to_string(),
            provider_base_url: DEFAULT_PROVIDER_URL.to_string(),
            request_timeout_seconds: None,
        }
    }
}

impl FormConfig {
    pub fn new(subject_name: impl Into<String>, recipient_address: impl Into<String>) -> Self {
        Self {
            subject_name: subject_name.into(),
            recipient_address: recipient_address.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_provider_credential(mut self, credential: impl Into<String>) -> Self {
        self.provider_credential = Some(credential.into());
        self
    }

    pub fn with_price_range(mut self, floor: u64, ceiling: u64) -> Self {
        self.price_floor = floor;
        self.price_ceiling = ceiling;
        self
    }

    pub fn with_theme(mut self, theme_name: impl Into<String>) -> Self {
        self.theme_name = theme_name.into();
        self
    }

    /// Layers defaults, an optional TOML file and `QUOTE_FORM__*` variables.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&FormConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("QUOTE_FORM")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let form_config: FormConfig = builder.build()?.try_deserialize()?;
        form_config.validate()?;

        Ok(form_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subject_name.trim().is_empty() {
            return Err(ConfigError::Message("Subject name cannot be empty".to_string()));
        }

        if self.recipient_address.trim().is_empty() {
            return Err(ConfigError::Message(
                "Recipient address cannot be empty".to_string(),
            ));
        }

        if self.price_floor > self.price_ceiling {
            return Err(ConfigError::Message(format!(
                "Price floor {} exceeds price ceiling {}",
                self.price_floor, self.price_ceiling
            )));
        }

        let transport = self.transport();
        if !transport.is_configured() {
            tracing::warn!(
                subject = %self.subject_name,
                "Quote form has neither an endpoint URL nor a provider credential; submissions will fail"
            );
        } else if transport.endpoint_url().is_none() {
            tracing::warn!("Quote form sends directly through the email provider - prefer a relay endpoint in production!");
        }

        Ok(())
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig::new(self.endpoint_url.clone(), self.provider_credential.clone())
    }
}

/// Settings for the relay server process.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub relay: RelayConfig,
    pub provider: ProviderConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    pub path: String,
    pub sender_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            path: "/api/submit-quote".to_string(),
            sender_address: DEFAULT_SENDER.to_string(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_PROVIDER_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?);

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        if app_config.provider.api_key.is_empty() {
            if let Ok(key) = std::env::var("RESEND_API_KEY") {
                app_config.provider.api_key = key;
            }
        }

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if !self.relay.path.starts_with('/') {
            return Err(ConfigError::Message(
                "Relay path must start with '/'".to_string(),
            ));
        }

        if self.relay.sender_address.trim().is_empty() {
            return Err(ConfigError::Message(
                "Sender address cannot be empty".to_string(),
            ));
        }

        if self.provider.api_key.is_empty() {
            return Err(ConfigError::Message(
                "Provider API key cannot be empty (set APP__PROVIDER__API_KEY or RESEND_API_KEY)".to_string(),
            ));
        }

        if self.relay.sender_address == DEFAULT_SENDER {
            tracing::warn!("Using the provider's onboarding sender address - change this in production!");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
