//! Error handling for the journal engine.
//!
//! Every failure that reaches an HTTP client is a [`JournalError`]: a stable
//! machine-readable [`ErrorCode`] plus a human-readable message.
//!
//! | Code | HTTP status | Usage |
//! |------|-------------|-------|
//! | `INVALID_REQUEST` | 400 | Malformed body or query |
//! | `TRADE_NOT_FOUND` | 404 | Unknown trade id for the user |
//! | `INTERNAL_ERROR` | 500 | Storage failure or unexpected error |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::trade_journal::RepositoryError;

/// Error codes returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid request format or missing fields.
    InvalidRequest,
    /// Trade not found.
    TradeNotFound,
    /// Internal server error.
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::TradeNotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wire name of the code.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::TradeNotFound => "TRADE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// A client-facing error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("[{code}] {message}")]
pub struct JournalError {
    code: ErrorCode,
    message: String,
}

impl JournalError {
    /// Create a new error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid request.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Trade not found.
    #[must_use]
    pub fn trade_not_found(trade_id: &str) -> Self {
        Self::new(
            ErrorCode::TradeNotFound,
            format!("Trade {trade_id} not found"),
        )
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Convert to the JSON body sent to clients.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            code: self.code.reason().to_string(),
            message: self.message.clone(),
        }
    }
}

impl From<RepositoryError> for JournalError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::TradeNotFound { trade_id, .. } => Self::trade_not_found(&trade_id),
            RepositoryError::Storage(msg) => Self::internal(msg),
        }
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        if self.code == ErrorCode::InternalError {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (self.code.http_status(), Json(self.to_http_response())).into_response()
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
