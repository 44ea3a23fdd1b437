//! Command-line interface for textsan
//!
//! Usage:
//!   textsan [--source `<source>`] [--target `<path>`] [--stats basic|enhanced]
//!   textsan --config `<config.json>`
//!
//! Without `--source` the built-in sample text is processed. Without `--target`
//! the report is printed to stdout.

use std::process::ExitCode;
use textsan::textsan::{config, logging, pipeline};

fn main() -> ExitCode {
    let matches = config::command().get_matches();
    let args = config::CliArgs::from_matches(&matches);

    logging::init(logging::level_for(args.verbose, args.quiet));

    let settings = config::resolve(&args);
    if pipeline::process(&settings) {
        ExitCode::SUCCESS
    } else {
        tracing::error!("text processing failed");
        ExitCode::FAILURE
    }
}
