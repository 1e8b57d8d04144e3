//! CLI entry point for the session harvester.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

mod app;
mod cli;
mod output;

use app::{runtime, signals, terminal};
use cli::Args;

fn main() -> ExitCode {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Log level priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = terminal::resolve_default_log_level(&args);
    let no_color = terminal::is_no_color_requested(&args);
    terminal::init_tracing(default_level, no_color);

    debug!(?args, "CLI arguments parsed");

    signals::install_interrupt_handler();

    match runtime::run_harvester() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!("{error:#}");
            ExitCode::from(2)
        }
    }
}
