mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use commands::pass_fail::Show;
use marksheet_core::model::OverallStatus;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "marksheet",
    version,
    about = "Extract student results from university result-sheet PDFs"
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// pdftotext binary to use instead of the one on PATH
    #[arg(long, global = true, env = "MARKSHEET_PDFTOTEXT", value_name = "PATH")]
    pdftotext: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a result sheet (PDF or extracted .txt) into the summary or detail dataset
    Parse {
        /// Path to PDF or text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Show per-subject marks instead of the summary
        #[arg(long)]
        detail: bool,
    },
    /// Headline statistics for the batch
    Stats {
        input_file: PathBuf,

        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Split students into passed and failed (ATKT counts as failed)
    PassFail {
        input_file: PathBuf,

        /// Which group to list
        #[arg(long, value_enum, default_value_t = Show::All)]
        show: Show,

        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Best students above a percentage threshold
    Top {
        input_file: PathBuf,

        /// Students strictly above this percentage qualify
        #[arg(long, default_value = "89")]
        threshold: Decimal,

        /// How many students to list
        #[arg(long, default_value_t = marksheet_core::reports::TOP_LIMIT)]
        limit: usize,

        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Students within a percentage range, optionally as a PDF or CSV listing
    Division {
        input_file: PathBuf,

        /// Lowest percentage, inclusive (default: 60)
        #[arg(long)]
        min: Option<Decimal>,

        /// Highest percentage, inclusive (default: best in the batch)
        #[arg(long)]
        max: Option<Decimal>,

        /// Statuses to include: Pass, ATKT, Fail (default: Pass)
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<OverallStatus>,

        /// Write the listing to a PDF file
        #[arg(long, value_name = "FILE")]
        pdf: Option<PathBuf>,

        /// Write the listing to a CSV file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Title line of the PDF listing
        #[arg(long, env = "MARKSHEET_PDF_TITLE")]
        title: Option<String>,

        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Average marks and pass rate per subject
    Subjects {
        input_file: PathBuf,

        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Find students by seat number or name
    Search {
        input_file: PathBuf,

        /// Case-insensitive text to look for
        term: String,

        /// Show the marks table of every match
        #[arg(long)]
        detail: bool,

        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Write the batch as an xlsx workbook with recomputed totals
    Export {
        input_file: PathBuf,

        /// Destination .xlsx file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = |input_file: PathBuf| commands::Source {
        path: input_file,
        pdftotext: cli.pdftotext.clone(),
    };

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
            detail,
        } => commands::parse::run(&source(input_file), &output, out, detail),
        Commands::Stats { input_file, output } => commands::stats::run(&source(input_file), &output),
        Commands::PassFail {
            input_file,
            show,
            output,
        } => commands::pass_fail::run(&source(input_file), show, &output),
        Commands::Top {
            input_file,
            threshold,
            limit,
            output,
        } => commands::top::run(&source(input_file), threshold, limit, &output),
        Commands::Division {
            input_file,
            min,
            max,
            statuses,
            pdf,
            csv,
            title,
            output,
        } => commands::division::run(
            &source(input_file),
            commands::division::Options {
                min,
                max,
                statuses,
                pdf,
                csv,
                title,
            },
            &output,
        ),
        Commands::Subjects { input_file, output } => {
            commands::subjects::run(&source(input_file), &output)
        }
        Commands::Search {
            input_file,
            term,
            detail,
            output,
        } => commands::search::run(&source(input_file), &term, detail, &output),
        Commands::Export { input_file, out } => commands::export::run(&source(input_file), &out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
