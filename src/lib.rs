//! Engineering Suite API Library
//!
//! Box geometry and material cost calculators served over HTTP.

pub mod calculator;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::SuiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
