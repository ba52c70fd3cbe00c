//! CLI argument definitions for ripple.
//!
//! Uses `clap` derive macros to define the full command surface. Each
//! command corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ripple",
    version,
    about = "Dependency management across a multi-project solution",
    long_about = "ripple keeps the dependency declarations of every project in a solution \
                  consistent: solution-wide pins, cross-project version validation, and \
                  update propagation through the whole aggregate."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new solution in the current directory
    Init {
        /// Solution name
        name: String,
        /// Persistence mode: ripple or classic
        #[arg(short, long, default_value = "ripple")]
        mode: String,
    },

    /// Print the merged dependency view
    List,

    /// Check cross-project version agreement
    Validate,

    /// Pin a dependency to a new version everywhere it is declared
    Update {
        /// Package and version (Name@Version)
        dep: String,
    },

    /// Float a dependency: forget its pinned version everywhere
    Float {
        /// Package name
        dep: String,
    },

    /// Convert the solution to the other persistence mode
    Convert {
        /// Target mode: ripple or classic
        mode: String,
    },

    /// List declared dependencies whose packages are missing locally
    Missing,
}

/// Parse the process arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
