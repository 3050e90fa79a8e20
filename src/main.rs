// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::{io, num::NonZeroUsize, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use mailtally::{ImportConfig, cli::Args, presentation};
use mailtally_shared_kernel::ErrorContext;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(args: &Args) {
    // RUST_LOG, when set, wins over the -v/-q flags.
    env_logger::Builder::new().filter_level(args.log_level()).format_timestamp(None).parse_default_env().init();
}

fn run(args: &Args) -> Result<()> {
    let config = ImportConfig::try_from(args)?;
    let report = mailtally::run_with_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let top = args.top.map(NonZeroUsize::get);
    presentation::write_report(&mut out, &report, args.format, top).context("writing report")?;
    Ok(())
}
