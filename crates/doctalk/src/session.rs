//! Session: one caller's corpus and upload history

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::corpus::Corpus;
use crate::types::DocumentSummary;

/// One caller's session.
///
/// The corpus is created empty at session start, grows monotonically as
/// uploads succeed, and is destroyed with the session. Only the request
/// orchestration layer appends to it.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session id
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Accumulated document corpus
    pub corpus: Corpus,
    /// Upload-order summaries of the stored documents, for listing
    pub uploads: Vec<DocumentSummary>,
}

impl Session {
    /// Create a new empty session
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            corpus: Corpus::new(),
            uploads: Vec::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
