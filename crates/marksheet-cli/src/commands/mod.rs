pub mod division;
pub mod export;
pub mod parse;
pub mod pass_fail;
pub mod search;
pub mod stats;
pub mod subjects;
pub mod top;

use marksheet_core::error::MarksheetError;
use marksheet_core::extraction::pdftotext::PdftotextExtractor;
use marksheet_core::extraction::text::PlainTextExtractor;
use marksheet_core::extraction::PdfExtractor;
use marksheet_core::Batch;
use std::path::PathBuf;

/// An input document and how to extract it.
pub struct Source {
    pub path: PathBuf,
    pub pdftotext: Option<PathBuf>,
}

impl Source {
    /// Read and process the document. `.txt` files are taken as already
    /// extracted text; anything else goes through pdftotext.
    pub fn load(&self) -> Result<Batch, MarksheetError> {
        let bytes = std::fs::read(&self.path)?;

        let is_text = self
            .path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
        let extractor: Box<dyn PdfExtractor> = if is_text {
            Box::new(PlainTextExtractor)
        } else {
            match &self.pdftotext {
                Some(program) => Box::new(PdftotextExtractor::with_program(program)),
                None => Box::new(PdftotextExtractor::new()),
            }
        };

        tracing::debug!(
            path = %self.path.display(),
            backend = extractor.backend_name(),
            "loading document"
        );
        marksheet_core::process_document(&bytes, extractor.as_ref())
    }
}

/// Print any non-empty diagnostics to stderr.
pub fn report_diagnostics(batch: &Batch) {
    let diagnostics = batch.diagnostics();
    if !diagnostics.skipped_pages.is_empty() {
        eprintln!("  {} page(s) without student data", diagnostics.skipped_pages.len());
    }
    if !diagnostics.skipped_lines.is_empty() {
        eprintln!(
            "  {} subject line(s) skipped during parsing",
            diagnostics.skipped_lines.len()
        );
    }
    for excluded in &diagnostics.excluded_from_summary {
        eprintln!(
            "  warning: page {} ({}) left out of the summary: {}",
            excluded.page_number,
            excluded.name.as_deref().unwrap_or("unnamed"),
            excluded.reason
        );
    }
}
