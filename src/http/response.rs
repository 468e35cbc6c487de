//! Response envelopes and error mapping.
//!
//! # Responsibilities
//! - Wrap successful payloads as `{success: true, data}`
//! - Map validation and body-parsing failures to
//!   `{success: false, error, detail}`, where `detail` is the field
//!   existing web clients read and `error` mirrors it
//!
//! # Design Decisions
//! - Every calculator failure is reported with the calculator's prefix
//!   ("Calculation error: ", "Cost calculation error: ")
//! - Malformed bodies are 400, not the framework default 422
//! - Oversized bodies keep 413

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::ValidationError;

/// Successful response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub detail: String,
}

impl ErrorBody {
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            error: message.clone(),
            detail: message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Which calculator produced an error; selects the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    Calculation,
    CostCalculation,
}

impl ErrorContext {
    pub const fn label(self) -> &'static str {
        match self {
            ErrorContext::Calculation => "Calculation error",
            ErrorContext::CostCalculation => "Cost calculation error",
        }
    }
}

/// Error returned by calculator handlers.
#[derive(Debug, Error)]
#[error("{}: {}", .context.label(), .detail)]
pub struct ApiError {
    pub context: ErrorContext,
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// A rejected input value.
    pub fn validation(context: ErrorContext, error: &ValidationError) -> Self {
        Self {
            context,
            status: StatusCode::BAD_REQUEST,
            detail: error.to_string(),
        }
    }

    /// A body that could not be read or deserialized.
    pub fn rejection(context: ErrorContext, rejection: JsonRejection) -> Self {
        let status = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            StatusCode::PAYLOAD_TOO_LARGE
        } else {
            StatusCode::BAD_REQUEST
        };
        Self {
            context,
            status,
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody::new(self.to_string());
        (self.status, Json(body)).into_response()
    }
}
