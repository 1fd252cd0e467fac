//! Command dispatch and handler modules.

mod find;

use miette::Result;

use crate::cli::Cli;

/// Route a parsed CLI invocation to the command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    find::exec(
        cli.directory,
        cli.search,
        cli.only_from,
        cli.config.as_deref(),
    )
}
