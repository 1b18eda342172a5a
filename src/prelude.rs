//! Prelude module - import commonly used types.
//!
//! ```rust,ignore
//! use launchkit::prelude::*;
//! ```

pub use crate::host::{Host, Os, SystemHost};
pub use crate::script::{
    run_applescript, run_argv, run_command, run_platform_script, run_powershell, CommandOutput,
    ExecOptions, ScriptError, ScriptResult,
};
pub use crate::template::{
    search_list, search_list_multi, Action, CompiledExport, ExportMode, ImmutableListItem,
    ImmutableListTemplate, ListItem, MutableListTemplate, NoneTemplate, Render, TemplateBuilder,
    TemplateExports, DEFAULT_PLACEHOLDER,
};
pub use crate::VERSION;
