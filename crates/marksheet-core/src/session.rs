use crate::dataset::Batch;
use crate::error::MarksheetError;
use crate::extraction::PdfExtractor;
use std::sync::Arc;

/// Holds the batch of the most recently processed document.
///
/// A new batch only replaces the current one once it is complete and
/// non-empty; any failure leaves the previous batch in place.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Arc<Batch>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a document and make its batch current.
    pub fn process(
        &mut self,
        bytes: &[u8],
        extractor: &dyn PdfExtractor,
    ) -> Result<Arc<Batch>, MarksheetError> {
        let batch = crate::process_document(bytes, extractor)?;
        self.replace(batch)
    }

    /// Swap in a finished batch. An empty batch is rejected.
    pub fn replace(&mut self, batch: Batch) -> Result<Arc<Batch>, MarksheetError> {
        if batch.is_empty() {
            return Err(MarksheetError::NoData);
        }
        let batch = Arc::new(batch);
        self.current = Some(Arc::clone(&batch));
        Ok(batch)
    }

    /// The current batch, shared read-only.
    pub fn batch(&self) -> Option<Arc<Batch>> {
        self.current.clone()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
