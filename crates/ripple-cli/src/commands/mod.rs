//! Command dispatch and handler modules.

mod convert;
mod float;
mod init;
mod list;
mod missing;
mod update;
mod validate;

use miette::Result;
use tracing::debug;

use ripple_core::solution::{self, Solution};
use ripple_util::errors::RippleError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Init { name, mode } => init::exec(&name, &mode),
        Command::List => list::exec(),
        Command::Validate => validate::exec(),
        Command::Update { dep } => update::exec(&dep),
        Command::Float { dep } => float::exec(&dep),
        Command::Convert { mode } => convert::exec(&mode),
        Command::Missing => missing::exec(),
    }
}

/// Load the solution at or above the current directory.
pub(crate) fn current_solution() -> Result<Solution> {
    let cwd = std::env::current_dir().map_err(RippleError::Io)?;
    let solution = solution::find_solution(&cwd)?;
    debug!(solution = %solution.name, path = %solution.path.display(), "loaded solution");
    Ok(solution)
}
