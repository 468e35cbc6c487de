//! Request size limits.
//!
//! # Responsibilities
//! - Enforce maximum request body size
//!
//! # Design Decisions
//! - Requests with an oversized `Content-Length` get 413 before the body is read
//! - Streaming bodies are cut off at the limit and surface as a body error

use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Wrap `router` with a request body limit of `max_bytes`.
pub fn apply_body_limit(router: Router, max_bytes: usize) -> Router {
    router.layer(RequestBodyLimitLayer::new(max_bytes))
}
