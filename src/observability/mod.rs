//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP layer and calculators produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metrics are optional and cheap when disabled

pub mod logging;
pub mod metrics;
