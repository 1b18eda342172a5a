//! Script execution error types.

use std::process::ExitStatus;

use thiserror::Error;

/// Result type for script execution.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Errors that can occur while executing a script or command.
///
/// Template building and list search have no failure modes; this taxonomy
/// covers the process layer only.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The process could not be spawned at all: missing executable,
    /// permission denied, or a pipe failure while feeding stdin or
    /// collecting output. Carries the raw OS error.
    #[error(transparent)]
    Spawn(#[from] std::io::Error),

    /// The shell reported a non-zero completion for
    /// [`run_command`](crate::script::run_command).
    #[error("`{command}` failed ({status}): {stderr}")]
    CommandFailed {
        /// Command string handed to the shell.
        command: String,
        /// Exit status the shell reported.
        status: ExitStatus,
        /// Captured standard error.
        stderr: String,
    },

    /// The process spawned by [`run_argv`](crate::script::run_argv) exited
    /// non-zero. The display form is exactly the accumulated stderr text.
    #[error("{stderr}")]
    ExitFailure {
        /// Exit status of the child.
        status: ExitStatus,
        /// Captured standard error, used verbatim as the message.
        stderr: String,
    },
}
