use crate::error::MarksheetError;
use crate::extraction::{split_pages, PageContent, PdfExtractor};
use std::ffi::OsString;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Uses `pdftotext -layout` so that one row of the marks table stays on one
/// text line.
pub struct PdftotextExtractor {
    program: OsString,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor {
            program: OsString::from("pdftotext"),
        }
    }

    /// Use a specific pdftotext binary instead of the one on `PATH`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        PdftotextExtractor {
            program: program.into(),
        }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, MarksheetError> {
        let mut tmpfile = tempfile::NamedTempFile::new()
            .map_err(|e| MarksheetError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| MarksheetError::Extraction(e.to_string()))?;

        let output = Command::new(&self.program)
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    MarksheetError::PdftotextNotFound
                } else {
                    MarksheetError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(MarksheetError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);
        tracing::debug!(pages = pages.len(), "pdftotext extracted text");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
