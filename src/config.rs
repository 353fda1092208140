//! Configuration

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DOMAIN: &str = "ai_agent_ha";
pub const DEFAULT_SERVICE: &str = "query";
pub const DEFAULT_HASS_URL: &str = "http://homeassistant.local:8123";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_ATTACH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Which capability a widget queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTarget {
    pub domain: String,
    pub service: String,
    /// Backend provider to ask for; the backend picks one when unset
    pub provider: Option<String>,
    pub debug: bool,
}

impl Default for QueryTarget {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            provider: None,
            debug: false,
        }
    }
}

impl QueryTarget {
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }
}

/// Timing of the attachment bootstrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// How often to check for the widget definition
    pub poll_interval: Duration,
    /// Give up waiting for the definition after this long
    pub timeout: Duration,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: DEFAULT_ATTACH_TIMEOUT,
        }
    }
}

/// Connection settings for the REST host handle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HassConfig {
    pub base_url: String,
    /// Long-lived access token
    pub token: Option<String>,
}

impl Default for HassConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HASS_URL.to_string(),
            token: None,
        }
    }
}

impl HassConfig {
    /// Read `HASS_URL` and `HASS_TOKEN`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_url: lookup("HASS_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(|| DEFAULT_HASS_URL.to_string()),
            token: lookup("HASS_TOKEN").filter(|t| !t.is_empty()),
        }
    }
}
