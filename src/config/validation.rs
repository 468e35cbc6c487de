//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Reject CORS settings browsers would refuse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SuiteConfig → Result<(), Vec<ConfigValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::SuiteConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("api.prefix '{0}' must be empty or start with '/' and not end with '/'")]
    InvalidPrefix(String),

    #[error("cors origin '{0}' is not a valid header value")]
    InvalidOrigin(String),

    #[error("cors origin pattern '{0}' must contain exactly one '*'")]
    InvalidOriginPattern(String),

    #[error("cors allowed_origins '*' cannot be combined with allow_credentials")]
    WildcardWithCredentials,

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroTimeout,

    #[error("security.max_body_size must be greater than 0")]
    ZeroBodyLimit,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SuiteConfig) -> Result<(), Vec<ConfigValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ConfigValidationError::EmptyHost);
    }

    let prefix = &config.api.prefix;
    if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
        errors.push(ConfigValidationError::InvalidPrefix(prefix.clone()));
    }

    let cors = &config.cors;
    for origin in &cors.allowed_origins {
        if origin != "*" && HeaderValue::from_str(origin).is_err() {
            errors.push(ConfigValidationError::InvalidOrigin(origin.clone()));
        }
    }
    for pattern in &cors.allowed_origin_patterns {
        if pattern.matches('*').count() != 1 {
            errors.push(ConfigValidationError::InvalidOriginPattern(pattern.clone()));
        }
    }
    if cors.allow_credentials && cors.allowed_origins.iter().any(|o| o == "*") {
        errors.push(ConfigValidationError::WildcardWithCredentials);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ConfigValidationError::ZeroTimeout);
    }
    if config.security.max_body_size == 0 {
        errors.push(ConfigValidationError::ZeroBodyLimit);
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ConfigValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }
    if !LOG_LEVELS.contains(&observability.log_level.to_lowercase().as_str()) {
        errors.push(ConfigValidationError::InvalidLogLevel(
            observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SuiteConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SuiteConfig::default();
        config.listener.host = String::new();
        config.api.prefix = "api/".to_string();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ConfigValidationError::EmptyHost,
                ConfigValidationError::InvalidPrefix("api/".to_string()),
                ConfigValidationError::ZeroTimeout,
                ConfigValidationError::InvalidLogLevel("loud".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_prefix_is_allowed() {
        let mut config = SuiteConfig::default();
        config.api.prefix = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_wildcard_origin_with_credentials() {
        let mut config = SuiteConfig::default();
        config.cors.allowed_origins = vec!["*".to_string()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::WildcardWithCredentials]);

        config.cors.allow_credentials = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_origin_pattern_needs_one_wildcard() {
        let mut config = SuiteConfig::default();
        config.cors.allowed_origin_patterns = vec!["https://*.*.app".to_string()];
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ConfigValidationError::InvalidOriginPattern(_)));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = SuiteConfig::default();
        config.observability.metrics_address = "not-an-address".to_string();
        assert!(validate_config(&config).is_err());

        config.observability.metrics_enabled = false;
        assert!(validate_config(&config).is_ok());
    }
}
