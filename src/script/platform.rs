//! Platform-specific script execution.
//!
//! PowerShell and AppleScript wrappers plus the OS-dispatching entry point
//! used by "run this script" style plugin entries.

use crate::host::{Host, Os};

use super::error::ScriptResult;
use super::options::ExecOptions;
use super::runner::{run_command, CommandOutput};

/// Execute a PowerShell script.
///
/// Delegates to [`run_command`] with the shell forced to `powershell.exe`;
/// only meaningful on Windows hosts.
pub async fn run_powershell(script: &str) -> ScriptResult<CommandOutput> {
    run_command(script, &ExecOptions::new().with_shell("powershell.exe")).await
}

/// Execute an AppleScript via `osascript -e "..."`.
///
/// When `escape_quotes` is true every literal `"` in `script` becomes `\"`
/// before interpolation. That is the only sanitization performed; the caller
/// is responsible for any other shell-significant characters in the script.
pub async fn run_applescript(script: &str, escape_quotes: bool) -> ScriptResult<CommandOutput> {
    run_command(&osascript_invocation(script, escape_quotes), &ExecOptions::default()).await
}

/// Execute a script with the mechanism native to the host OS: PowerShell on
/// Windows, AppleScript on macOS, the plain shell elsewhere.
///
/// Calls [`Host::hide_and_refocus`] first so the script acts on the
/// application that had focus before the launcher appeared. Passing
/// `use_default_shell = true` skips the OS dispatch and always uses the
/// platform default shell.
pub async fn run_platform_script<H>(
    host: &H,
    script: &str,
    use_default_shell: bool,
) -> ScriptResult<CommandOutput>
where
    H: Host + ?Sized,
{
    host.hide_and_refocus();

    if use_default_shell {
        return run_command(script, &ExecOptions::default()).await;
    }
    match host.os() {
        Os::Windows => run_powershell(script).await,
        Os::MacOs => run_applescript(script, false).await,
        Os::Linux => run_command(script, &ExecOptions::default()).await,
    }
}

/// Build the `osascript` command string for a script.
fn osascript_invocation(script: &str, escape_quotes: bool) -> String {
    if escape_quotes {
        format!("osascript -e \"{}\"", escape_double_quotes(script))
    } else {
        format!("osascript -e \"{script}\"")
    }
}

fn escape_double_quotes(script: &str) -> String {
    script.replace('"', "\\\"")
}
