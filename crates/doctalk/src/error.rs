//! Error types for the document Q&A pipeline

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Document Q&A errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Declared content type is not in the recognized set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Payload is unreadable or corrupt for its declared format
    #[error("Failed to extract text from '{filename}': {message}")]
    Extraction { filename: String, message: String },

    /// Extraction succeeded but produced no text
    #[error("No extractable text in '{filename}'")]
    EmptyDocument { filename: String },

    /// A question must be non-empty before retrieval runs
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// Unknown session id
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    /// Completion collaborator failure (credential, network, service-side)
    #[error("Answer synthesis failed: {0}")]
    Synthesis(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an extraction error
    pub fn extraction(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Extraction {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create a synthesis error
    pub fn synthesis(message: impl Into<String>) -> Self {
        Self::Synthesis(message.into())
    }

    /// Stable machine-readable kind for response bodies and upload reports
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::UnsupportedFormat(_) => "unsupported_format",
            Error::Extraction { .. } => "extraction_failed",
            Error::EmptyDocument { .. } => "empty_document",
            Error::EmptyQuestion => "empty_question",
            Error::SessionNotFound(_) => "session_not_found",
            Error::Synthesis(_) => "synthesis_failed",
            Error::Io(_) => "io_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Config(_) => StatusCode::BAD_REQUEST,
            Error::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
            Error::Extraction { .. } => StatusCode::BAD_REQUEST,
            Error::EmptyDocument { .. } => StatusCode::BAD_REQUEST,
            Error::EmptyQuestion => StatusCode::BAD_REQUEST,
            Error::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Error::Synthesis(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": {
                "type": self.kind(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}
