//! Format-specific text extraction

use calamine::Reader;

use crate::error::{Error, Result};
use crate::types::FormatTag;

/// Multi-format text extractor.
///
/// Dispatches on the caller-declared format tag; the payload is only read,
/// never written. A malformed payload for its declared format is an
/// extraction error. An extraction that succeeds but yields no text is left
/// to the caller to report.
pub struct TextExtractor;

impl TextExtractor {
    /// Extract plain text from a payload with a recognized format tag
    pub fn extract(tag: FormatTag, filename: &str, data: &[u8]) -> Result<String> {
        match tag {
            FormatTag::Text => Self::extract_plain_text(filename, data),
            FormatTag::Pdf => Self::extract_pdf(filename, data),
            FormatTag::Docx | FormatTag::Doc => Self::extract_word(filename, data),
            FormatTag::Xlsx | FormatTag::Xls => Self::extract_spreadsheet(filename, data),
        }
    }

    /// Decode the payload as UTF-8, verbatim
    fn extract_plain_text(filename: &str, data: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(data)
            .map_err(|e| Error::extraction(filename, format!("not valid UTF-8: {}", e)))?;
        Ok(text.to_string())
    }

    /// Extract PDF text page by page, concatenating in page order.
    ///
    /// A page with no extractable text contributes the empty string rather
    /// than failing, so an image-only PDF yields an empty result without an
    /// error.
    fn extract_pdf(filename: &str, data: &[u8]) -> Result<String> {
        let document = lopdf::Document::load_mem(data)
            .map_err(|e| Error::extraction(filename, format!("failed to load PDF: {}", e)))?;

        let mut content = String::new();
        for (page_number, _) in document.get_pages() {
            match document.extract_text(&[page_number]) {
                Ok(page_text) => content.push_str(&page_text),
                Err(e) => {
                    tracing::debug!("no text on page {} of '{}': {}", page_number, filename, e);
                }
            }
        }

        Ok(content)
    }

    /// Extract Word document text, one paragraph per line
    fn extract_word(filename: &str, data: &[u8]) -> Result<String> {
        let document = docx_rs::read_docx(data)
            .map_err(|e| Error::extraction(filename, e.to_string()))?;

        let mut content = String::new();
        for child in document.document.children {
            if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
                for child in paragraph.children {
                    if let docx_rs::ParagraphChild::Run(run) = child {
                        for child in run.children {
                            if let docx_rs::RunChild::Text(text) = child {
                                content.push_str(&text.text);
                            }
                        }
                    }
                }
                content.push('\n');
            }
        }

        Ok(content)
    }

    /// Render spreadsheet sheets in file order: a `Sheet: <name>` header,
    /// tab-separated rows, then a blank separator line
    fn extract_spreadsheet(filename: &str, data: &[u8]) -> Result<String> {
        let cursor = std::io::Cursor::new(data.to_vec());
        let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
            .map_err(|e| Error::extraction(filename, e.to_string()))?;

        let mut content = String::new();
        for sheet_name in workbook.sheet_names().to_vec() {
            content.push_str(&format!("Sheet: {}\n", sheet_name));

            if let Ok(range) = workbook.worksheet_range(&sheet_name) {
                for row in range.rows() {
                    let cells: Vec<String> = row.iter().map(render_cell).collect();
                    content.push_str(&cells.join("\t"));
                    content.push('\n');
                }
            }

            content.push('\n');
        }

        Ok(content)
    }
}

/// Render a single spreadsheet cell as text
fn render_cell(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Bool(b) => b.to_string(),
        calamine::Data::DateTime(dt) => dt.to_string(),
        _ => String::new(),
    }
}
