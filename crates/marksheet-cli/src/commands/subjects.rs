use marksheet_core::error::MarksheetError;
use marksheet_core::reports::subjects::subject_statistics;

use super::Source;
use crate::output;

pub fn run(source: &Source, output_format: &str) -> Result<(), MarksheetError> {
    let batch = source.load()?;
    let stats = subject_statistics(&batch);

    match output_format {
        "json" => output::json::print(&stats),
        _ => {
            println!("{}", output::table::format_subjects(&stats));
            Ok(())
        }
    }
}
