//! Session-scoped corpus of normalized documents

use crate::types::Document;

/// Append-only, ordered collection of documents for one session.
///
/// Documents are immutable once stored and are never removed or reordered;
/// insertion order is the only ordering and drives the retrieval tie-break.
/// There is no deduplication.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document at the end of the sequence.
    ///
    /// Empty-after-trim text is rejected as a no-op; the caller reports that
    /// outcome before reaching the store.
    pub fn append(&mut self, document: Document) {
        if document.text.trim().is_empty() {
            return;
        }
        self.documents.push(document);
    }

    /// Stored documents in insertion order
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// True when nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
