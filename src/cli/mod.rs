use anyhow::Result;

pub use args::{Arguments, CheckCommand, Command};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

mod args;
pub mod commands;
mod exit_code;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}
