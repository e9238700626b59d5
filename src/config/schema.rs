//! Client configuration: API location, token file and log level.

use serde::{Deserialize, Serialize};

/// Fallback API location when neither a config file nor the environment
/// supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "SYNERGYSPHERE_API_URL";

/// Root configuration for the API client.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Where the REST API lives and how requests are sent.
    pub api: ApiConfig,

    /// Token persistence settings.
    pub auth: AuthConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl ClientConfig {
    /// Defaults with the base URL taken from `SYNERGYSPHERE_API_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Apply environment overrides on top of the current values.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
    }
}

/// REST endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every request path is appended to (e.g., "http://localhost:5000").
    pub base_url: String,

    /// Optional total request timeout in seconds. Absent means the transport
    /// default applies.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Token storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AuthConfig {
    /// Path of the JSON file the bearer token is persisted in.
    pub token_file: Option<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.api.timeout_secs.is_none());
        assert!(config.auth.token_file.is_none());
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_partial_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            [api]
            timeout_secs = 15
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, Some(15));
        assert_eq!(config.observability.log_level, "info");
    }
}
