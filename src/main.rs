// Inherit lint configuration from lib.rs for consistency
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use clap::Parser;

use invdash::cli::commands::Cli;
use invdash::cli::output;
use invdash::config::Config;
use invdash::driver::{self, Outcome};
use invdash::error::Result;
use invdash::operations::IndexOutput;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli);
    match driver::run(&config)? {
        Outcome::Reported(report) => println!("{}", output::format_info(&report)),
        Outcome::Indexed(result) => {
            let output: IndexOutput = result.into();
            println!("{}", output::format_json(&output));
        }
        Outcome::Idle => {}
    }
    Ok(())
}

/// Logs go to stderr; stdout carries results only.
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
