//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SuiteConfig;
use crate::config::validation::{validate_config, ConfigValidationError};

/// Overrides `listener.host`.
pub const ENV_HOST: &str = "SUITE_HOST";
/// Overrides `listener.port`.
pub const ENV_PORT: &str = "SUITE_PORT";
/// Overrides `cors.allowed_origins` (comma-separated).
pub const ENV_ALLOWED_ORIGINS: &str = "SUITE_ALLOWED_ORIGINS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for environment variable {var}")]
    Env { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ConfigValidationError>),
}

fn join_errors(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_config(path: &Path) -> Result<SuiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load configuration from a TOML file, apply environment overrides
/// and validate the result.
pub fn load_config(path: &Path) -> Result<SuiteConfig, ConfigError> {
    let config = parse_config(path)?;
    finalize(config, |var| std::env::var(var).ok())
}

fn finalize<F>(mut config: SuiteConfig, lookup: F) -> Result<SuiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    apply_env_overrides(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides on top of a parsed configuration.
///
/// `lookup` returns the value of a variable if it is set.
pub fn apply_env_overrides<F>(config: &mut SuiteConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(ENV_HOST) {
        config.listener.host = host;
    }

    if let Some(port) = lookup(ENV_PORT) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::Env {
            var: ENV_PORT,
            value: port.clone(),
        })?;
    }

    if let Some(origins) = lookup(ENV_ALLOWED_ORIGINS) {
        config.cors.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
    }

    Ok(())
}

/// Build the startup configuration: the file at `path` when given,
/// otherwise defaults overlaid with the process environment.
pub fn resolve_config(path: Option<&Path>) -> Result<SuiteConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => finalize(SuiteConfig::default(), |var| std::env::var(var).ok()),
    }
}
