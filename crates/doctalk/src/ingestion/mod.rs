//! Upload ingestion: normalize a file into the session corpus

pub mod parser;

pub use parser::TextExtractor;

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::types::{Document, DocumentSummary, FormatTag};

/// Normalize one uploaded file and append it to the corpus.
///
/// The declared content type is mapped onto the closed format set; an
/// unrecognized tag is its own outcome, distinct from a malformed payload.
/// An extraction that yields only whitespace is rejected before storage and
/// reported, so the corpus never holds an empty document. On any error the
/// corpus is left untouched.
pub fn ingest_file(
    corpus: &mut Corpus,
    filename: &str,
    content_type: &str,
    data: &[u8],
) -> Result<DocumentSummary> {
    let tag = FormatTag::from_content_type(content_type)
        .ok_or_else(|| Error::UnsupportedFormat(content_type.to_string()))?;

    let text = TextExtractor::extract(tag, filename, data)?;

    if text.trim().is_empty() {
        return Err(Error::EmptyDocument {
            filename: filename.to_string(),
        });
    }

    let summary = DocumentSummary {
        filename: filename.to_string(),
        format: tag,
        text_chars: text.chars().count(),
    };

    corpus.append(Document::new(tag, text));
    tracing::info!(
        "stored '{}' ({}, {} chars)",
        summary.filename,
        tag.display_name(),
        summary.text_chars
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_extracted_text() {
        let mut corpus = Corpus::new();
        let summary =
            ingest_file(&mut corpus, "notes.txt", "text/plain", b"The cat sat on the mat")
                .unwrap();

        assert_eq!(summary.format, FormatTag::Text);
        assert_eq!(summary.text_chars, 22);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.all()[0].text, "The cat sat on the mat");
    }

    #[test]
    fn unsupported_tag_leaves_corpus_unchanged() {
        let mut corpus = Corpus::new();
        let err = ingest_file(&mut corpus, "photo.png", "image/png", b"\x89PNG").unwrap_err();

        assert_eq!(err.kind(), "unsupported_format");
        assert!(corpus.is_empty());
    }

    #[test]
    fn corrupt_payload_leaves_corpus_unchanged() {
        let mut corpus = Corpus::new();
        let err =
            ingest_file(&mut corpus, "broken.pdf", "application/pdf", b"not a pdf").unwrap_err();

        assert_eq!(err.kind(), "extraction_failed");
        assert!(corpus.is_empty());
    }

    #[test]
    fn whitespace_only_extraction_is_rejected() {
        let mut corpus = Corpus::new();
        let err = ingest_file(&mut corpus, "blank.txt", "text/plain", b"  \n\t \n").unwrap_err();

        assert_eq!(err.kind(), "empty_document");
        assert!(corpus.is_empty());
    }

    #[test]
    fn a_bad_file_does_not_block_later_files() {
        // Mirrors the batch loop: each file is ingested independently
        let mut corpus = Corpus::new();
        let files: [(&str, &str, &[u8]); 3] = [
            ("good1.txt", "text/plain", b"first document"),
            ("bad.pdf", "application/pdf", b"corrupt"),
            ("good2.txt", "text/plain", b"second document"),
        ];

        let mut stored = 0;
        let mut failed = 0;
        for (filename, content_type, data) in files {
            match ingest_file(&mut corpus, filename, content_type, data) {
                Ok(_) => stored += 1,
                Err(_) => failed += 1,
            }
        }

        assert_eq!(stored, 2);
        assert_eq!(failed, 1);
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.all()[0].text, "first document");
        assert_eq!(corpus.all()[1].text, "second document");
    }
}
