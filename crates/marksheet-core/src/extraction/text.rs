use crate::error::MarksheetError;
use crate::extraction::{split_pages, PageContent, PdfExtractor};

/// Backend for documents whose text has already been extracted.
///
/// Expects UTF-8 text with pages separated by form feeds, which is what
/// `pdftotext` writes. Invalid UTF-8 is a decode failure, not lossy.
pub struct PlainTextExtractor;

impl PdfExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, MarksheetError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| MarksheetError::Extraction(format!("input is not valid UTF-8: {e}")))?;
        Ok(split_pages(text))
    }

    fn backend_name(&self) -> &str {
        "text"
    }
}
