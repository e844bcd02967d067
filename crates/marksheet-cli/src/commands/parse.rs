use marksheet_core::error::MarksheetError;
use std::path::PathBuf;

use super::{report_diagnostics, Source};
use crate::output;

pub fn run(
    source: &Source,
    output_format: &str,
    output_file: Option<PathBuf>,
    detail: bool,
) -> Result<(), MarksheetError> {
    let batch = source.load()?;

    let json = || -> Result<String, MarksheetError> {
        Ok(if detail {
            serde_json::to_string_pretty(batch.detail())?
        } else {
            serde_json::to_string_pretty(batch.summary())?
        })
    };

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            std::fs::write(&path, json()?)?;
            eprintln!(
                "Parsed {} student(s), written to {}",
                batch.len(),
                path.display()
            );
            report_diagnostics(&batch);
        }
        None => {
            let output_str = match output_format {
                "json" => json()?,
                _ if detail => output::table::format_detail(batch.detail()),
                _ => {
                    let rows: Vec<_> = batch.summary().iter().collect();
                    output::table::format_summary(&rows)
                }
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
