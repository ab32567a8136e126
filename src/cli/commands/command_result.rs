use std::path::PathBuf;

use crate::core::{Comparison, SkippedFile};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub comparison: Comparison,
    pub report_path: PathBuf,
    /// The JSON export, printed to stdout.
    pub json: String,
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
    pub registry_size: usize,
    /// True when the config was read from a `.rcscanrc.json`.
    pub config_from_file: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running rcscan commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of results that are not in the registry.
    pub mismatch_count: usize,
    /// If true, exit code 1 should be returned when mismatch_count > 0.
    pub exit_on_mismatch: bool,
}
