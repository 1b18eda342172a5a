//! # Launchkit
//!
//! Helper library for building plugins hosted inside a desktop launcher
//! runtime.
//!
//! Launchkit covers the two chores almost every launcher plugin ends up
//! reimplementing:
//!
//! - **Script execution**: run a shell command, a PowerShell script, or an
//!   AppleScript, capture stdout and the exit code, and pick the right
//!   mechanism for the current OS.
//! - **List templates**: describe a plugin entry declaratively (no UI, fixed
//!   list, or dynamic list) and compile it into the `{mode, args}` record the
//!   launcher dispatches `enter`/`search`/`select` calls against, with a
//!   built-in case-insensitive substring search over list items.
//!
//! The two facilities are independent; use either without the other.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use launchkit::prelude::*;
//!
//! let exports = TemplateBuilder::new()
//!     .none([NoneTemplate::new("lock-screen", |_action: &Action| {
//!         // runs when the user triggers the "lock-screen" keyword
//!     })])
//!     .immutable_list([ImmutableListTemplate::new("bookmarks")
//!         .with_placeholder("Search bookmarks")
//!         .with_item(ListItem::new("Docs"), |_action: &Action| {
//!             // open the docs bookmark
//!         })])
//!     .build();
//! ```
//!
//! Script execution is async; each call resolves once the child process has
//! exited:
//!
//! ```rust,ignore
//! use launchkit::{run_command, ExecOptions};
//!
//! let output = run_command("git status --short", &ExecOptions::default()).await?;
//! println!("{}", output.stdout());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod host;
pub mod prelude;
pub mod script;
pub mod template;

pub use host::{Host, Os, SystemHost};
pub use script::{
    run_applescript, run_argv, run_command, run_platform_script, run_powershell, CommandOutput,
    ExecOptions, ScriptError, ScriptResult,
};
pub use template::{
    search_list, search_list_multi, Action, CompiledExport, ExportMode, ImmutableListItem,
    ImmutableListTemplate, ListItem, MutableListTemplate, NoneTemplate, Render, TemplateBuilder,
    TemplateExports, DEFAULT_PLACEHOLDER,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
