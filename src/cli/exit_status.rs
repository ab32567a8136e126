use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed (mismatches are reported but do not fail the run)
/// - `Failure` (1): `--strict` was given and at least one identifier is not in the registry
/// - `Error` (2): Command failed (missing policy directory, unreadable registry, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed; any mismatches were only reported.
    Success,
    /// Strict mode found identifiers missing from the registry.
    Failure,
    /// Command failed before producing its outputs.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
