//! pomscout CLI binary.
//!
//! This is the entry point for the `pomscout` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and dispatches
//! to the command handler.

mod cli;
mod commands;

use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::parse();

    let default_filter = if args.verbose {
        "warn,pomscout_ops=debug,pomscout_resolver=debug,pomscout_maven=debug,pomscout_util=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    commands::dispatch(args)
}
