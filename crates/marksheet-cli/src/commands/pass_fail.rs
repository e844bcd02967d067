use clap::ValueEnum;
use marksheet_core::error::MarksheetError;
use marksheet_core::reports::pass_fail;

use super::Source;
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Show {
    Passed,
    Failed,
    All,
}

pub fn run(source: &Source, show: Show, output_format: &str) -> Result<(), MarksheetError> {
    let batch = source.load()?;
    let split = pass_fail(&batch);

    if output_format == "json" {
        return match show {
            Show::Passed => output::json::print(&split.passed),
            Show::Failed => output::json::print(&split.failed),
            Show::All => output::json::print(&split),
        };
    }

    if show != Show::Failed {
        println!("Passed: {}\n", split.passed.len());
        println!("{}", output::table::format_summary(&split.passed));
    }
    if show == Show::All {
        println!();
    }
    if show != Show::Passed {
        println!("Failed (including ATKT): {}\n", split.failed.len());
        println!("{}", output::table::format_summary(&split.failed));
    }
    Ok(())
}
