//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Capture and normalize authenticated session material from HTTP requests.
///
/// Harvester extracts cookies, bearer/basic tokens, and CSRF/custom headers
/// from a captured request (raw HTTP text, cURL command, or manual entry)
/// and writes one normalized session record as JSON.
#[derive(Parser, Debug)]
#[command(name = "harvester")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable ANSI colors in log output
    #[arg(long)]
    pub no_color: bool,
}
