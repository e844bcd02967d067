use marksheet_core::error::MarksheetError;
use marksheet_core::export::listing::write_listing_csv;
use marksheet_core::export::pdf::{write_division_pdf, write_listing, DEFAULT_INSTITUTION};
use marksheet_core::model::OverallStatus;
use marksheet_core::reports::division::{division, percentage_bands, DivisionFilter};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::Source;
use crate::output;

pub struct Options {
    pub min: Option<Decimal>,
    pub max: Option<Decimal>,
    pub statuses: Vec<OverallStatus>,
    pub pdf: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub title: Option<String>,
}

pub fn run(source: &Source, opts: Options, output_format: &str) -> Result<(), MarksheetError> {
    let batch = source.load()?;

    let defaults = DivisionFilter::default_for(&batch);
    let statuses = if opts.statuses.is_empty() {
        defaults.statuses
    } else {
        opts.statuses
    };
    let filter = DivisionFilter::new(
        opts.min.unwrap_or(defaults.min),
        opts.max.unwrap_or(defaults.max),
        statuses,
    )?;
    let rows = division(&batch, &filter);

    if let Some(path) = &opts.pdf {
        let bytes = match &opts.title {
            Some(title) => write_listing(title, &filter.describe(), &rows)?,
            None => write_division_pdf(DEFAULT_INSTITUTION, &filter, &rows)?,
        };
        std::fs::write(path, bytes)?;
        eprintln!("Wrote {} student(s) to {}", rows.len(), path.display());
    }

    if let Some(path) = &opts.csv {
        std::fs::write(path, write_listing_csv(&rows)?)?;
        eprintln!("Wrote {} student(s) to {}", rows.len(), path.display());
    }

    match output_format {
        "json" => output::json::print(&rows),
        _ => {
            println!("{}\n", filter.describe());
            println!("{}", output::table::format_summary(&rows));
            println!();
            output::table::print_bands(&percentage_bands(&rows));
            Ok(())
        }
    }
}
