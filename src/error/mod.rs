//! Error handling module.
//!
//! This module provides unified error handling with HTTP status code mapping
//! and standardized API error responses.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No characters are available to generate from.
    #[error("No characters available: select at least one character class")]
    EmptyAlphabet,

    /// The host has no working source of secure randomness.
    #[error("Secure random source unavailable: {0}")]
    SecureRandomUnavailable(String),

    /// Requested length is outside the accepted range.
    #[error("Invalid length {length}: must be between {min} and {max}")]
    InvalidLength {
        /// Requested length.
        length: usize,
        /// Smallest accepted length.
        min: usize,
        /// Largest accepted length.
        max: usize,
    },

    /// Copy or record requested without a password.
    #[error("Nothing to copy: generate a password first")]
    NothingToCopy,

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyAlphabet => ErrorCode::EMPTY_ALPHABET,
            Self::SecureRandomUnavailable(_) => ErrorCode::RANDOM_UNAVAILABLE,
            Self::InvalidLength { .. } => ErrorCode::INVALID_LENGTH,
            Self::NothingToCopy => ErrorCode::NOTHING_TO_COPY,
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::Storage(_) => ErrorCode::STORAGE_ERROR,
            Self::Internal(_) => ErrorCode::INTERNAL_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::EmptyAlphabet => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidLength { .. } | Self::NothingToCopy | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::SecureRandomUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the user can fix this by changing their input.
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::EmptyAlphabet
                | Self::InvalidLength { .. }
                | Self::NothingToCopy
                | Self::BadRequest(_)
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let category = self.error_code().category();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        if self.is_user_correctable() {
            tracing::debug!(
                error_code = code,
                category = %category,
                status = %status,
                message = %message,
                "Request rejected"
            );
        } else {
            tracing::error!(
                error_code = code,
                category = %category,
                status = %status,
                message = %message,
                "Request failed"
            );
        }

        let body = Json(json!({
            "code": code,
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}

/// Storage-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Lock acquisition failed.
    #[error("Failed to acquire lock: {0}")]
    LockFailed(String),

    /// File I/O error.
    #[error("File I/O error: {0}")]
    FileIO(String),

    /// Backend not available.
    #[error("Storage backend unavailable")]
    Unavailable,
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileIO(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Clipboard sink error type.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// The clipboard could not be written.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias using `StorageError`.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
