//! Report outputs: the color-coded spreadsheet and the JSON export.
//!
//! Kept apart from `core` so the scan engine can be used without touching the filesystem
//! or spawning processes.

pub mod launcher;
pub mod spreadsheet;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::core::{ClassifiedResult, Comparison};

pub use launcher::{Launch, Launcher};

/// Default spreadsheet file name inside the output directory.
pub const DEFAULT_REPORT_FILE_NAME: &str = "terraform_policy_rc_type_comparison.xlsx";

/// Where the spreadsheet goes and how it gets opened.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub output_dir: PathBuf,
    pub file_name: String,
    pub launcher: Launcher,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            output_dir: std::env::temp_dir(),
            file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            launcher: Launcher::for_host(),
        }
    }
}

impl ReportOptions {
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

/// Save the spreadsheet and try to open it.
///
/// Returns the absolute path of the saved file. A failed launch is logged and otherwise
/// ignored.
pub fn write_report(comparison: &Comparison, options: &ReportOptions) -> Result<PathBuf> {
    if options.file_name.is_empty() {
        bail!("Report file name must not be empty");
    }

    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            options.output_dir.display()
        )
    })?;

    let path = options.report_path();
    spreadsheet::write_workbook(comparison, &path)?;
    let path = absolute(&path);

    if let Err(e) = options.launcher.launch(&path) {
        eprintln!(
            "{} Report created but could not auto-open: {:#}",
            "warning:".bold().yellow(),
            e
        );
    }

    Ok(path)
}

fn absolute(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Serialize results as a JSON array with 2-space indentation.
pub fn export_json(results: &[ClassifiedResult]) -> Result<String> {
    serde_json::to_string_pretty(results).context("Failed to serialize results as JSON")
}
