pub mod dataset;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod reports;
pub mod session;
pub mod template;

pub use dataset::Batch;
pub use error::MarksheetError;
pub use session::Session;

use extraction::PdfExtractor;

/// Main API entry point: turn a results document into a batch of students.
///
/// A document that yields no students is an error, so callers never end up
/// holding an empty batch.
pub fn process_document(
    bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Batch, MarksheetError> {
    let pages = extractor.extract_pages(bytes)?;
    tracing::debug!(
        pages = pages.len(),
        backend = extractor.backend_name(),
        "extracted pages"
    );

    let parsed = parsing::parse_students(&pages);
    let batch = Batch::from_parsed(parsed);
    if batch.is_empty() {
        return Err(MarksheetError::NoData);
    }

    let diagnostics = batch.diagnostics();
    tracing::info!(
        students = batch.len(),
        skipped_pages = diagnostics.skipped_pages.len(),
        skipped_lines = diagnostics.skipped_lines.len(),
        "processed document"
    );
    Ok(batch)
}
