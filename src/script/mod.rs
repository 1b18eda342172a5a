//! Cross-platform script execution.
//!
//! Thin wrappers around [`tokio::process`] for the patterns launcher plugins
//! need: run a string through the platform shell, spawn a program with an
//! explicit argv (optionally feeding its stdin), and dispatch a script to
//! PowerShell, AppleScript, or a plain shell depending on the host OS.
//!
//! Every call spawns exactly one child process and resolves once it exits.
//! There is no retry, timeout, or built-in cancellation;
//! [`CommandOutput::kill`] is exposed so callers can bolt on their own
//! policy.

mod error;
mod options;
mod platform;
mod runner;

pub use error::{ScriptError, ScriptResult};
pub use options::ExecOptions;
pub use platform::{run_applescript, run_platform_script, run_powershell};
pub use runner::{run_argv, run_command, CommandOutput};
