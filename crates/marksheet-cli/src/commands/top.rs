use marksheet_core::error::MarksheetError;
use marksheet_core::reports::top_students;
use rust_decimal::Decimal;

use super::Source;
use crate::output;

pub fn run(
    source: &Source,
    threshold: Decimal,
    limit: usize,
    output_format: &str,
) -> Result<(), MarksheetError> {
    let batch = source.load()?;
    let top = top_students(&batch, threshold, limit);

    match output_format {
        "json" => output::json::print(&top),
        _ => {
            println!(
                "{} student(s) above {}%, showing {}\n",
                top.above_threshold,
                threshold.normalize(),
                top.ranked.len()
            );
            println!("{}", output::table::format_summary(&top.ranked));
            Ok(())
        }
    }
}
