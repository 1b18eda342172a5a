//! Compiled export records, the host-facing registration contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::item::ListItem;

/// Placeholder the host shows in the search box when a template does not
/// set one.
pub const DEFAULT_PLACEHOLDER: &str = "Search";

/// Host-supplied callback that pushes a list of items onto the visible UI.
pub type Render<'a> = &'a mut dyn FnMut(Vec<ListItem>);

pub(crate) type EnterFn = Box<dyn FnMut(&Action, &mut dyn FnMut(Vec<ListItem>))>;
pub(crate) type SearchFn = Box<dyn FnMut(&Action, &str, &mut dyn FnMut(Vec<ListItem>))>;
pub(crate) type SelectFn = Box<dyn FnMut(&Action, &ListItem)>;

/// Dispatch mode of a compiled export, as the host names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// No visible list; only `enter` is dispatched.
    None,
    /// List UI; `enter`, `search`, and `select` are dispatched.
    List,
}

impl ExportMode {
    /// The host's wire name for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::List => "list",
        }
    }
}

/// Mapping from template `code` to its compiled export, the structure the
/// launcher runtime registers and dispatches against.
pub type TemplateExports = HashMap<String, CompiledExport>;

pub(crate) struct ExportArgs {
    pub(crate) enter: EnterFn,
    pub(crate) search: Option<SearchFn>,
    pub(crate) select: Option<SelectFn>,
    pub(crate) placeholder: Option<String>,
}

/// One plugin entry point in the normalized `{mode, args}` shape the host
/// dispatches against.
///
/// Produced by [`TemplateBuilder`](super::TemplateBuilder); invoked
/// repeatedly by the host for the lifetime of the plugin process. Exports
/// hold per-template state behind `Rc` cells and are deliberately not
/// `Send`: the whole surface lives on the host's event thread.
pub struct CompiledExport {
    mode: ExportMode,
    args: ExportArgs,
}

impl CompiledExport {
    pub(crate) fn new(mode: ExportMode, args: ExportArgs) -> Self {
        Self { mode, args }
    }

    /// Dispatch mode of this export.
    pub fn mode(&self) -> ExportMode {
        self.mode
    }

    /// Search-box placeholder, when the template set one. Hosts fall back
    /// to [`DEFAULT_PLACEHOLDER`].
    pub fn placeholder(&self) -> Option<&str> {
        self.args.placeholder.as_deref()
    }

    /// Dispatch an `enter` call. For [`ExportMode::None`] exports the
    /// render callback is ignored.
    pub fn enter(&mut self, action: &Action, render: Render<'_>) {
        (self.args.enter)(action, render);
    }

    /// Dispatch a `search` call with the current search-box word.
    /// No-op for [`ExportMode::None`] exports, which carry no search.
    pub fn search(&mut self, action: &Action, word: &str, render: Render<'_>) {
        if let Some(search) = self.args.search.as_mut() {
            search(action, word, render);
        }
    }

    /// Dispatch a `select` call for the item the user chose.
    /// No-op for [`ExportMode::None`] exports, which carry no select.
    pub fn select(&mut self, action: &Action, item: &ListItem) {
        if let Some(select) = self.args.select.as_mut() {
            select(action, item);
        }
    }
}

impl std::fmt::Debug for CompiledExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledExport")
            .field("mode", &self.mode)
            .field("placeholder", &self.args.placeholder)
            .finish()
    }
}
