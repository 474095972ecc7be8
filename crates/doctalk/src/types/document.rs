//! Document types and the recognized format tags

use serde::{Deserialize, Serialize};

/// Recognized upload formats, keyed by the caller-declared content type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// Plain text
    Text,
    /// PDF document
    Pdf,
    /// Word document (.docx)
    Docx,
    /// Legacy Word document (.doc)
    Doc,
    /// Excel spreadsheet (.xlsx)
    Xlsx,
    /// Legacy Excel spreadsheet (.xls)
    Xls,
}

impl FormatTag {
    /// Map a declared MIME-like content type onto the closed tag set.
    ///
    /// Parameters after `;` (charset and friends) are ignored. Returns `None`
    /// for anything outside the set so the caller can surface a distinct
    /// unsupported-format report rather than an extraction failure.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let tag = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_lowercase();

        match tag.as_str() {
            "text/plain" => Some(Self::Text),
            "application/pdf" => Some(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            "application/msword" => Some(Self::Doc),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Xlsx)
            }
            "application/vnd.ms-excel" => Some(Self::Xls),
            _ => None,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Text => "Plain Text",
            Self::Pdf => "PDF",
            Self::Docx => "Word Document (.docx)",
            Self::Doc => "Word Document (.doc)",
            Self::Xlsx => "Excel Spreadsheet (.xlsx)",
            Self::Xls => "Excel Spreadsheet (.xls)",
        }
    }
}

/// A normalized document: the plain text extracted from one uploaded file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Declared format of the source file
    pub format: FormatTag,
    /// Extracted text content
    pub text: String,
}

impl Document {
    /// Create a new document
    pub fn new(format: FormatTag, text: String) -> Self {
        Self { format, text }
    }
}
