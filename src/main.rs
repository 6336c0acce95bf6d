//! Floorscan CLI
//!
//! Usage:
//!   floorscan                       # Scan ./input.txt
//!   floorscan path/to/input.txt     # Scan a given file
//!   floorscan input.txt --json      # JSON output
//!   floorscan input.txt --verbose   # Debug logging on stderr

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use floorscan::core::scan_file;
use floorscan::types::ScanReport;
use floorscan::{DEFAULT_INPUT_PATH, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "floorscan",
    version = VERSION,
    about = "Follow parenthesis floor instructions",
    long_about = "Reads floor instructions from a file and reports where they lead.\n\n\
                  Instructions:\n  \
                  (  go up one floor\n  \
                  )  go down one floor\n\n\
                  Every other character is ignored but still counts as a position.\n\
                  Prints the final floor and the first character position that\n\
                  reaches the basement (floor -1)."
)]
struct Args {
    /// Instruction file
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let outcome = match scan_file(&args.input) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!(path = %e.path().display(), "instruction source unavailable");
            eprintln!("floorscan: {}", e);
            process::exit(1);
        }
    };

    let report = ScanReport::new(args.input.display().to_string(), outcome);

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("floorscan: cannot encode report: {}", e);
                process::exit(1);
            }
        }
    } else if args.no_color {
        println!("{}", report.to_parseable_string());
    } else {
        println!("{}", report.to_terminal_string());
    }
}

/// Logs go to stderr; RUST_LOG wins over --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
