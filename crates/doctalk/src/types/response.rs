//! Response types for the HTTP API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::document::FormatTag;

/// Outcome of an ask request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AskStatus {
    /// Answer synthesized from a selected document context
    Answered,
    /// No document shared vocabulary with the question; answer synthesized
    /// without context
    AnsweredWithoutContext,
    /// The session corpus is empty; synthesis was skipped
    EmptyCorpus,
}

/// Response to an ask request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// Outcome of the pipeline
    pub status: AskStatus,
    /// Synthesized answer (absent when the corpus is empty)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    /// Warning or informational note for the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Total processing time in milliseconds
    #[serde(default)]
    pub processing_time_ms: u64,
}

impl AskResponse {
    /// Answer produced with document context
    pub fn answered(answer: String, processing_time_ms: u64) -> Self {
        Self {
            status: AskStatus::Answered,
            answer: Some(answer),
            note: None,
            processing_time_ms,
        }
    }

    /// Answer produced without context (zero lexical overlap)
    pub fn answered_without_context(answer: String, processing_time_ms: u64) -> Self {
        Self {
            status: AskStatus::AnsweredWithoutContext,
            answer: Some(answer),
            note: Some(
                "No uploaded document shares any words with the question; \
                 the answer was generated without document context."
                    .to_string(),
            ),
            processing_time_ms,
        }
    }

    /// Corpus is empty, synthesis skipped
    pub fn empty_corpus(processing_time_ms: u64) -> Self {
        Self {
            status: AskStatus::EmptyCorpus,
            answer: None,
            note: Some(
                "No documents have been uploaded in this session. \
                 Upload at least one document before asking a question."
                    .to_string(),
            ),
            processing_time_ms,
        }
    }
}

/// Summary of a stored document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Original filename as uploaded
    pub filename: String,
    /// Declared format
    pub format: FormatTag,
    /// Length of the extracted text in characters
    pub text_chars: usize,
}

/// Per-file error entry in an upload report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadError {
    /// Filename the error applies to
    pub filename: String,
    /// Machine-readable error kind
    pub kind: String,
    /// Human-readable message
    pub error: String,
}

/// Response to a batch upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// True when at least one document was stored
    pub success: bool,
    /// Documents added to the session corpus, in upload order
    pub documents: Vec<DocumentSummary>,
    /// Per-file errors; one bad file never aborts the rest of the batch
    pub errors: Vec<UploadError>,
    /// Total processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Response to session creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Session id to use on subsequent requests
    pub session_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Number of documents currently stored
    pub document_count: usize,
}

/// Per-session document listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDocumentsResponse {
    /// Session id
    pub session_id: Uuid,
    /// Stored documents in insertion order
    pub documents: Vec<DocumentSummary>,
}
