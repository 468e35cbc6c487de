//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → cors.rs (preflight, origin checks)
//!     → request.rs (request ID, tracing span)
//!     → handlers.rs (deserialize, validate, calculate)
//!     → response.rs (success envelope or error mapping)
//!     → Send to client
//! ```

pub mod cors;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, ApiResponse, ErrorBody, HealthStatus};
pub use server::{build_router, AppState, HttpServer};
