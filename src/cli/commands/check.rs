use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    config::{Config, load_config},
    export::{Launcher, ReportOptions},
    pipeline::{self, ScanInput},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;

    let input = scan_input(&cmd, &loaded.config, &cwd);
    let options = report_options(&cmd, &loaded.config, &cwd);

    let output = pipeline::run(&input, &options)?;
    let mismatch_count = output.comparison.mismatch_count();

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            comparison: output.comparison,
            report_path: output.report_path,
            json: output.json,
            files_scanned: output.files_scanned,
            skipped: output.skipped,
            registry_size: output.registry_size,
            config_from_file: loaded.from_file,
        }),
        mismatch_count,
        exit_on_mismatch: cmd.strict,
    })
}

/// Flags win over config values; relative paths resolve against `cwd`.
fn scan_input(cmd: &CheckCommand, config: &Config, cwd: &Path) -> ScanInput {
    let policies_dir = cmd
        .policies_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.policies_dir));
    let registry = cmd
        .registry
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.registry));

    ScanInput {
        policies_dir: cwd.join(policies_dir),
        registry_path: cwd.join(registry),
        ignores: config.ignores.clone(),
    }
}

fn report_options(cmd: &CheckCommand, config: &Config, cwd: &Path) -> ReportOptions {
    let output_dir = match (&cmd.output_dir, &config.output_dir) {
        (Some(dir), _) => cwd.join(dir),
        (None, Some(dir)) => cwd.join(dir),
        (None, None) => std::env::temp_dir(),
    };

    let launcher = if cmd.no_open || !config.open_report {
        Launcher::disabled()
    } else if let Some(program) = &config.open_command {
        Launcher::custom(program.clone())
    } else {
        Launcher::for_host()
    };

    ReportOptions {
        output_dir,
        file_name: config.report_file_name.clone(),
        launcher,
    }
}
