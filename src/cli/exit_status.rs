use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but some source files could not be parsed
/// - `Error` (2): Command failed due to internal error (config error, bad source root, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but some files could not be parsed.
    Failure,
    /// Command failed due to internal error.
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
