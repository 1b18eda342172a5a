//! Process invocation options.

use std::path::{Path, PathBuf};

use tokio::process::Command;

/// Options forwarded to the spawned process.
///
/// Mirrors the platform spawn options a launcher plugin typically needs:
/// working directory, extra environment variables, and (for
/// [`run_command`](crate::script::run_command) only) a shell override.
///
/// # Example
///
/// ```rust
/// use launchkit::ExecOptions;
///
/// let options = ExecOptions::new()
///     .with_current_dir("/tmp")
///     .with_env("FORCE_COLOR", "0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Working directory for the child. `None` inherits the caller's.
    pub current_dir: Option<PathBuf>,

    /// Environment variables added on top of the inherited environment,
    /// applied in order.
    pub env: Vec<(String, String)>,

    /// Shell to interpret the command string, e.g. `"powershell.exe"` or
    /// `"/bin/zsh"`. `None` picks the platform default (`cmd` on Windows,
    /// `sh` elsewhere). Ignored by `run_argv`, which never involves a shell.
    pub shell: Option<String>,
}

impl ExecOptions {
    /// Create options that inherit everything from the caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the working directory for the child.
    #[must_use]
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Add an environment variable for the child.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Override the shell used to interpret the command string.
    #[must_use]
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = Some(shell.into());
        self
    }

    /// Apply directory and environment settings to a command.
    pub(crate) fn apply(&self, cmd: &mut Command) {
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
    }

    /// Resolve the shell and its command flag, honoring the override.
    pub(crate) fn shell_invocation(&self) -> (&str, &'static str) {
        match self.shell.as_deref() {
            Some(shell) => (shell, shell_flag(shell)),
            None => default_shell(),
        }
    }
}

/// Flag that makes a shell interpret the next argument as a command string.
fn shell_flag(shell: &str) -> &'static str {
    let name = Path::new(shell)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(shell);
    if name.eq_ignore_ascii_case("cmd") {
        "/C"
    } else if name.eq_ignore_ascii_case("powershell") || name.eq_ignore_ascii_case("pwsh") {
        "-Command"
    } else {
        "-c"
    }
}

/// Shell and flag for the current platform.
fn default_shell() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
