use clap::Parser;
use std::env;
use std::fs;
use std::process::ExitCode;

use trivy_dbflags::args::Args;
use trivy_dbflags::config::{Config, find_config, load_config};
use trivy_dbflags::db::{DbFlagValues, to_options};
use trivy_dbflags::error::AppError;
use trivy_dbflags::log::{self, TracingLogger};
use trivy_dbflags::output::format_output;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = Args::parse();
    log::init(args.debug);
    let logger = TracingLogger;

    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None if args.no_config => None,
        None => find_config(&env::current_dir()?),
    };
    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_config(path, &logger)?
        }
        None => Config::default(),
    };

    let flags = DbFlagValues::resolve(&args.db, &config.db);
    tracing::debug!(?flags, "resolved db flags");
    let options = to_options(&flags, &logger)?;

    let output = format_output(args.format, &options)?;

    if !args.quiet {
        println!("{output}");
    }

    if let Some(path) = &args.output {
        fs::write(path, &output)?;
    }

    Ok(())
}
