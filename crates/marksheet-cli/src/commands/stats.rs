use marksheet_core::error::MarksheetError;
use marksheet_core::reports::dashboard;

use super::Source;
use crate::output;

pub fn run(source: &Source, output_format: &str) -> Result<(), MarksheetError> {
    let batch = source.load()?;
    let stats = dashboard(&batch);

    match output_format {
        "json" => output::json::print(&stats),
        _ => {
            output::table::print_dashboard(&stats);
            Ok(())
        }
    }
}
