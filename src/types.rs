// src/types.rs

use std::fmt;

use serde::Deserialize;

/// Whether the final line stays on screen once the child has exited.
///
/// - `Never`: the status line is cleared (default).
/// - `Always`: the final-format line is always written.
/// - `OnFailure`: the final-format line is written only when the child did
///   not exit successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveMode {
    #[default]
    Never,
    Always,
    OnFailure,
}

impl LeaveMode {
    /// Decide whether the final line should be kept for the given status.
    ///
    /// A missing status counts as a failure.
    pub fn keeps_final(self, status: Option<ChildStatus>) -> bool {
        match self {
            LeaveMode::Never => false,
            LeaveMode::Always => true,
            LeaveMode::OnFailure => !status.is_some_and(|s| s.success()),
        }
    }
}

/// How the child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildStatus {
    /// Normal exit with the given code.
    Exited(i32),
    /// Killed by the given signal number.
    Signaled(i32),
}

impl ChildStatus {
    pub fn success(self) -> bool {
        matches!(self, ChildStatus::Exited(0))
    }

    /// Map an OS exit status onto a `ChildStatus`.
    pub fn from_exit_status(status: std::process::ExitStatus) -> Self {
        use std::os::unix::process::ExitStatusExt;

        match (status.code(), status.signal()) {
            (Some(code), _) => ChildStatus::Exited(code),
            (None, Some(sig)) => ChildStatus::Signaled(sig),
            // Stopped/continued states never reach us from `wait`.
            (None, None) => ChildStatus::Exited(-1),
        }
    }
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildStatus::Exited(code) => write!(f, "exit code {code}"),
            ChildStatus::Signaled(sig) => write!(f, "signal {sig}"),
        }
    }
}
