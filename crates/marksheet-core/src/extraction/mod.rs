pub mod pdftotext;
pub mod text;

use crate::error::MarksheetError;

/// Content extracted from a single page of a result document.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number in the source document.
    pub page_number: usize,
    pub lines: Vec<String>,
}

impl PageContent {
    pub fn new(page_number: usize, text: &str) -> Self {
        PageContent {
            page_number,
            lines: text.lines().map(|l| l.to_string()).collect(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

/// Trait for document text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text content from document bytes, returning one PageContent per page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, MarksheetError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Split text on form feeds into numbered pages.
///
/// Page numbering is positional, so blank pages are kept. A single trailing
/// empty chunk (the form feed after the last page) is dropped.
pub(crate) fn split_pages(text: &str) -> Vec<PageContent> {
    let mut chunks: Vec<&str> = text.split('\x0c').collect();
    if chunks.len() > 1 && chunks.last().is_some_and(|c| c.trim().is_empty()) {
        chunks.pop();
    }
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| PageContent::new(i + 1, chunk))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_pages_keeps_blank_pages() {
        let pages = split_pages("cover\x0c\x0cdata line\x0c");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].page_number, 2);
        assert!(pages[1].lines.is_empty());
        assert_eq!(pages[2].lines, vec!["data line".to_string()]);
    }

    #[test]
    fn test_single_page_without_form_feed() {
        let pages = split_pages("only\nlines");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].lines.len(), 2);
    }
}
