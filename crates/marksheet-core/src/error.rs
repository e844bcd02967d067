#[derive(Debug, thiserror::Error)]
pub enum MarksheetError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no student data found in the document")]
    NoData,

    #[error("no student with seat number '{0}' in the current batch")]
    UnknownSeat(String),

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rust_xlsxwriter::XlsxError> for MarksheetError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        MarksheetError::Export(format!("xlsx: {e}"))
    }
}

impl From<lopdf::Error> for MarksheetError {
    fn from(e: lopdf::Error) -> Self {
        MarksheetError::Export(format!("pdf: {e}"))
    }
}

impl From<csv::Error> for MarksheetError {
    fn from(e: csv::Error) -> Self {
        MarksheetError::Export(format!("csv: {e}"))
    }
}
