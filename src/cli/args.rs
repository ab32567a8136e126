//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: scan policy files and cross-check `rc.type` values against the registry
//! - `init`: write a default `.rcscanrc.json`

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CheckCommand {
    /// Directory of policy files to scan (overrides config file)
    #[arg(long)]
    pub policies_dir: Option<PathBuf>,

    /// Registry JSON file: an array of identifiers or an object with a "resources" array
    /// (overrides config file)
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Directory to write the spreadsheet into (default: system temp directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Do not open the spreadsheet after writing it
    #[arg(long)]
    pub no_open: bool,

    /// Exit with status 1 when any identifier is not in the registry
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cross-check rc.type values in policy files against the resource registry
    Check(CheckCommand),
    /// Initialize a new .rcscanrc.json configuration file
    Init,
}
