use marksheet_core::error::MarksheetError;
use marksheet_core::reports::search::{search, student_detail};

use super::Source;
use crate::output;

pub fn run(source: &Source, term: &str, detail: bool, output_format: &str) -> Result<(), MarksheetError> {
    let batch = source.load()?;
    let matches = search(&batch, term);

    if detail {
        let details = matches
            .iter()
            .map(|row| student_detail(&batch, &row.seat_no))
            .collect::<Result<Vec<_>, _>>()?;
        return match output_format {
            "json" => output::json::print(&details),
            _ => {
                for (i, d) in details.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    output::table::print_student_detail(d);
                }
                Ok(())
            }
        };
    }

    match output_format {
        "json" => output::json::print(&matches),
        _ => {
            if matches.is_empty() {
                println!("No students matching '{}'", term.trim());
            } else {
                println!("{}", output::table::format_summary(&matches));
            }
            Ok(())
        }
    }
}
