//! Command execution.
//!
//! Handles spawning child processes and capturing output.

use std::ffi::OsStr;
use std::process::{ExitStatus, Stdio};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::{Child, Command};

use super::error::{ScriptError, ScriptResult};
use super::options::ExecOptions;

/// Outcome of a completed process invocation.
///
/// Holds the captured stdout text and a no-op-safe [`kill`](Self::kill)
/// handle, retained for API symmetry: in the success path the child has
/// already exited and killing it does nothing.
#[derive(Debug)]
pub struct CommandOutput {
    stdout: String,
    child: Child,
}

impl CommandOutput {
    fn new(stdout: String, child: Child) -> Self {
        Self { stdout, child }
    }

    /// Captured standard output as text.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Consume the output, keeping only the stdout text.
    pub fn into_stdout(self) -> String {
        self.stdout
    }

    /// Ask the OS to terminate the child process.
    ///
    /// Returns `false` when the signal could not be delivered, which
    /// includes the usual case of a child that has already exited.
    pub fn kill(&mut self) -> bool {
        self.child.start_kill().is_ok()
    }
}

/// Run a command string through the platform shell.
///
/// Uses `cmd /C` on Windows and `sh -c` elsewhere unless
/// [`ExecOptions::shell`] overrides the shell. Resolves with the captured
/// stdout once the shell exits with code 0; any other completion fails with
/// [`ScriptError::CommandFailed`] carrying the shell's exit status and
/// captured stderr.
///
/// # Example
///
/// ```rust,ignore
/// let output = run_command("git log --oneline -n 5", &ExecOptions::default()).await?;
/// println!("{}", output.stdout());
/// ```
pub async fn run_command(command: &str, options: &ExecOptions) -> ScriptResult<CommandOutput> {
    let (shell, flag) = options.shell_invocation();
    tracing::debug!(command, shell, "running shell command");

    let mut cmd = Command::new(shell);
    cmd.arg(flag).arg(command);
    options.apply(&mut cmd);
    cmd.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());

    let (status, stdout, stderr, child) = wait_with_capture(cmd, None).await?;
    if status.success() {
        Ok(CommandOutput::new(stdout, child))
    } else {
        Err(ScriptError::CommandFailed { command: command.to_string(), status, stderr })
    }
}

/// Spawn a program directly with an explicit argument list, no shell.
///
/// When `inputs` is given, each string is written to the child's stdin in
/// order and the stream is closed afterwards. Stdout and stderr are
/// accumulated while the child runs. Exit code 0 resolves with the stdout
/// text; any other exit fails with [`ScriptError::ExitFailure`], whose
/// message is exactly the accumulated stderr text. A spawn-level error
/// (executable not found, pipe failure) surfaces as
/// [`ScriptError::Spawn`].
pub async fn run_argv<I, S>(
    program: &str,
    args: I,
    options: &ExecOptions,
    inputs: Option<&[&str]>,
) -> ScriptResult<CommandOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    tracing::debug!(program, "spawning process");

    let mut cmd = Command::new(program);
    cmd.args(args);
    options.apply(&mut cmd);
    cmd.stdin(if inputs.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let (status, stdout, stderr, child) = wait_with_capture(cmd, inputs).await?;
    if status.success() {
        Ok(CommandOutput::new(stdout, child))
    } else {
        Err(ScriptError::ExitFailure { status, stderr })
    }
}

/// Spawn the command, feed stdin, drain both output pipes, and reap the
/// child. Stdin is fed concurrently with the reads so a child that echoes
/// while we write cannot deadlock on a full pipe.
async fn wait_with_capture(
    mut cmd: Command,
    inputs: Option<&[&str]>,
) -> ScriptResult<(ExitStatus, String, String, Child)> {
    let mut child = cmd.spawn()?;

    let stdin = child.stdin.take();
    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();

    let feed = async move {
        if let Some(mut pipe) = stdin {
            for input in inputs.unwrap_or_default() {
                pipe.write_all(input.as_bytes()).await?;
            }
            // dropping after shutdown closes the child's stdin
            pipe.shutdown().await?;
        }
        Ok::<_, std::io::Error>(())
    };
    let drain_stdout = async {
        let mut buf = Vec::new();
        if let Some(pipe) = stdout.as_mut() {
            pipe.read_to_end(&mut buf).await?;
        }
        Ok::<_, std::io::Error>(buf)
    };
    let drain_stderr = async {
        let mut buf = Vec::new();
        if let Some(pipe) = stderr.as_mut() {
            pipe.read_to_end(&mut buf).await?;
        }
        Ok::<_, std::io::Error>(buf)
    };

    let ((), out, err) = tokio::try_join!(feed, drain_stdout, drain_stderr)?;
    let status = child.wait().await?;

    tracing::debug!(code = ?status.code(), "child process exited");
    Ok((
        status,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
        child,
    ))
}
