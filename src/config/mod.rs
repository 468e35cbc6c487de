//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (SUITE_HOST / SUITE_PORT / SUITE_ALLOWED_ORIGINS overrides)
//!     → validation.rs (semantic checks)
//!     → SuiteConfig (validated, immutable)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, resolve_config, ConfigError};
pub use schema::{
    ApiConfig, AppConfig, CorsConfig, ListenerConfig, ObservabilityConfig, SecurityConfig,
    SuiteConfig, TimeoutConfig,
};
pub use validation::{validate_config, ConfigValidationError};
