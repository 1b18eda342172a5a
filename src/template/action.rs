//! Invocation context passed by the host runtime.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Context the launcher hands to `enter`/`search`/`select` when a plugin
/// entry is triggered.
///
/// The builder treats this as opaque and forwards it verbatim to the
/// template's own callbacks; the fields exist so plugins can inspect how
/// they were invoked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The template code that was triggered.
    pub code: String,

    /// How the entry was triggered (e.g. keyword, text match); the host's
    /// `type` field.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Trigger payload; its shape depends on `kind`.
    #[serde(default)]
    pub payload: Value,
}

impl Action {
    /// Create a bare action for the given template code.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), kind: String::new(), payload: Value::Null }
    }

    /// Set the trigger kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the trigger payload.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = payload.into();
        self
    }
}
