//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → limits.rs (check request body size)
//!     → handlers
//! Outgoing response:
//!     → headers.rs (add security headers)
//! ```

pub mod headers;
pub mod limits;

pub use headers::apply_security_headers;
pub use limits::apply_body_limit;
