//! Terminal output for command results.
//!
//! The JSON export is the only thing written to stdout; status lines, warnings and the
//! summary go to stderr so the export can be piped into other tools.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{ClassifiedResult, MatchStatus};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check(summary) => print_check_to(
            summary,
            verbose,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
        ),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print a check summary: status lines to `status`, the JSON export to `out`.
pub fn print_check_to<O: Write, E: Write>(
    summary: &CheckSummary,
    verbose: bool,
    out: &mut O,
    status: &mut E,
) {
    if verbose {
        if !summary.config_from_file {
            let _ = writeln!(
                status,
                "{} no {} found, using defaults",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }
        for result in &summary.comparison.results {
            print_result_line(result, status);
        }
    }

    print_skipped_warning(summary.skipped.len(), status);
    print_totals(summary, status);

    let _ = writeln!(
        status,
        "{} {}",
        "Report:".bold(),
        summary.report_path.display()
    );

    let _ = writeln!(out, "{}", summary.json);
}

fn print_result_line<W: Write>(result: &ClassifiedResult, writer: &mut W) {
    let mark = match result.status {
        MatchStatus::Match => SUCCESS_MARK.green(),
        MatchStatus::Mismatch => FAILURE_MARK.red(),
    };
    match &result.registry_title {
        Some(title) => {
            let _ = writeln!(
                writer,
                "  {} {}  {}  {}",
                mark,
                result.filename,
                result.resource_type,
                title.dimmed()
            );
        }
        None => {
            let _ = writeln!(
                writer,
                "  {} {}  {}",
                mark, result.filename, result.resource_type
            );
        }
    }
}

fn print_skipped_warning<W: Write>(count: usize, writer: &mut W) {
    if count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be read and {} skipped",
            "warning:".bold().yellow(),
            count,
            if count == 1 { "file" } else { "files" },
            if count == 1 { "was" } else { "were" }
        );
    }
}

fn print_totals<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let total = summary.comparison.results.len();
    let mismatches = summary.comparison.mismatch_count();
    let scanned = format!(
        "Checked {} {} in {} {} against {} registry {}",
        total,
        if total == 1 { "reference" } else { "references" },
        summary.files_scanned,
        if summary.files_scanned == 1 {
            "file"
        } else {
            "files"
        },
        summary.registry_size,
        if summary.registry_size == 1 {
            "entry"
        } else {
            "entries"
        }
    );

    if mismatches == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} - all recognized", scanned).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} - {} {}",
            FAILURE_MARK.red(),
            scanned,
            mismatches,
            if mismatches == 1 {
                "unknown resource type"
            } else {
                "unknown resource types"
            }
            .red()
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
