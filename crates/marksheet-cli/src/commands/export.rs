use marksheet_core::error::MarksheetError;
use marksheet_core::export::xlsx::write_workbook;
use std::path::Path;

use super::{report_diagnostics, Source};

pub fn run(source: &Source, out: &Path) -> Result<(), MarksheetError> {
    let batch = source.load()?;
    let bytes = write_workbook(&batch)?;
    std::fs::write(out, bytes)?;

    eprintln!(
        "Exported {} student(s) to {}",
        batch.len(),
        out.display()
    );
    report_diagnostics(&batch);
    Ok(())
}
