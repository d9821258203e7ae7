//! # Client configuration (`club.toml`)
//!
//! Settings the web client needs before it can talk to the backend. The file
//! is optional: every field has a default, so an empty document is the
//! default configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000/api"
//! timeout_secs = 10
//!
//! [recovery]
//! otp_ttl_secs = 300
//! redirect_delay_ms = 2000
//! ```
//!
//! The API base URL can also be baked in at build time through the
//! `CLUB_API_URL` environment variable (see [`ClientConfig::from_build_env`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub recovery: RecoveryConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout, applied on every target.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Password recovery settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecoveryConfig {
    /// Lifetime of a one-time code.
    #[serde(default = "default_otp_ttl")]
    pub otp_ttl_secs: u32,
    /// Pause on the success message before returning to the login page.
    #[serde(default = "default_redirect_delay")]
    pub redirect_delay_ms: u64,
}

fn default_otp_ttl() -> u32 {
    300
}

fn default_redirect_delay() -> u64 {
    2000
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            otp_ttl_secs: default_otp_ttl(),
            redirect_delay_ms: default_redirect_delay(),
        }
    }
}

impl RecoveryConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "club.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Defaults, with the API URL taken from `CLUB_API_URL` at compile time.
    pub fn from_build_env() -> Self {
        Self::default().with_api_url(option_env!("CLUB_API_URL"))
    }

    /// Builder method to override the API base URL. `None` or blank keeps
    /// the current one; a trailing slash is dropped.
    pub fn with_api_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert_eq!(config.recovery.otp_ttl_secs, 300);
        assert_eq!(config.recovery.redirect_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://club.example.edu/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://club.example.edu/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.recovery, RecoveryConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = ClientConfig::default();
        config.recovery.otp_ttl_secs = 60;
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_with_api_url() {
        let config = ClientConfig::default().with_api_url(Some("https://x.dev/api/"));
        assert_eq!(config.api.base_url, "https://x.dev/api");

        let unchanged = ClientConfig::default().with_api_url(Some("  "));
        assert_eq!(unchanged.api.base_url, DEFAULT_API_URL);
        assert_eq!(
            ClientConfig::default().with_api_url(None),
            ClientConfig::default()
        );
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ClientConfig::from_toml("[api]\ntimeout_secs = \"soon\"").is_err());
    }
}
