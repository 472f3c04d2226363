use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for build tools.
///
/// - `Success` (0): Command completed and produced its output
/// - `Failure` (1): Command completed but produced no output (nothing to extract)
/// - `Error` (2): Command failed due to internal error (config error, write error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and produced its output.
    Success,
    /// Command completed but produced no output (nothing to extract).
    Failure,
    /// Command failed due to internal error (config error, write error, etc.)
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
