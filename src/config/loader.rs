//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClientConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from a TOML file, apply environment overrides and
/// validate the result.
pub fn load_config(path: &Path) -> Result<ClientConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: ClientConfig = toml::from_str(&content)?;
    config.apply_env();

    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::debug!(path = ?path, base_url = %config.api.base_url, "Configuration loaded");
    Ok(config)
}

/// Environment-derived configuration, validated.
pub fn load_from_env() -> Result<ClientConfig, ConfigError> {
    let config = ClientConfig::from_env();
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("synergysphere-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(&temp_path("does-not-exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_values_reported() {
        let path = temp_path("invalid.toml");
        fs::write(
            &path,
            "[api]\ntimeout_secs = 0\n[observability]\nlog_level = \"chatty\"\n",
        )
        .unwrap();

        let err = load_config(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        match err {
            ConfigError::Validation(errors) => assert!(errors.len() >= 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_error() {
        let path = temp_path("broken.toml");
        fs::write(&path, "[api\nbase_url = ").unwrap();
        let err = load_config(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
