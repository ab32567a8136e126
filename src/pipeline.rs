//! One synchronous pass: policy files -> occurrences -> classified results -> outputs.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::{
    core::{Comparison, SkippedFile, compare, extract_occurrences, load_registry},
    export::{ReportOptions, export_json, write_report},
};

/// Inputs for a scan run.
#[derive(Debug, Clone)]
pub struct ScanInput {
    pub policies_dir: PathBuf,
    pub registry_path: PathBuf,
    pub ignores: Vec<String>,
}

impl ScanInput {
    pub fn new(policies_dir: impl AsRef<Path>, registry_path: impl AsRef<Path>) -> Self {
        Self {
            policies_dir: policies_dir.as_ref().to_path_buf(),
            registry_path: registry_path.as_ref().to_path_buf(),
            ignores: Vec::new(),
        }
    }
}

/// Everything a run produces.
#[derive(Debug)]
pub struct ScanOutput {
    pub comparison: Comparison,
    pub report_path: PathBuf,
    pub json: String,
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
    pub registry_size: usize,
}

/// Scan the policy directory and classify every occurrence, without writing anything.
///
/// Fails when the policy directory is missing or the registry cannot be loaded.
pub fn scan(input: &ScanInput) -> Result<(Comparison, ScanStats)> {
    let extracted = extract_occurrences(&input.policies_dir, &input.ignores)?;
    let registry = load_registry(&input.registry_path)?;
    if registry.is_empty() {
        eprintln!(
            "{} registry {} has no resource types; every reference will be a mismatch",
            "warning:".bold().yellow(),
            input.registry_path.display()
        );
    }
    let comparison = compare(extracted.occurrences, &registry);

    Ok((
        comparison,
        ScanStats {
            files_scanned: extracted.files_scanned,
            skipped: extracted.skipped,
            registry_size: registry.len(),
        },
    ))
}

/// Counters gathered while scanning.
#[derive(Debug, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
    pub registry_size: usize,
}

/// Full run: scan, write the spreadsheet, build the JSON export.
///
/// Nothing is written when scanning fails.
pub fn run(input: &ScanInput, options: &ReportOptions) -> Result<ScanOutput> {
    let (comparison, stats) = scan(input)?;
    let report_path = write_report(&comparison, options)?;
    let json = export_json(&comparison.results)?;

    Ok(ScanOutput {
        comparison,
        report_path,
        json,
        files_scanned: stats.files_scanned,
        skipped: stats.skipped,
        registry_size: stats.registry_size,
    })
}
