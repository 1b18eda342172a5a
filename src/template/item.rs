//! List item type shared by list templates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One selectable row in a plugin list.
///
/// `title` is what the launcher displays and what the default search
/// matches; `description` is the optional secondary line. Any further
/// fields the host understands (icons, urls, payloads) ride in `extra` and
/// are serialized flat, at the same level as `title`.
///
/// # Example
///
/// ```rust
/// use launchkit::ListItem;
///
/// let item = ListItem::new("Open Project")
///     .with_description("Most recently used")
///     .with_field("icon", "folder.png");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Display title; the default search matches against it.
    pub title: String,

    /// Optional secondary line; also searched when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Arbitrary host-visible fields, serialized at the top level.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ListItem {
    /// Create an item with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), description: None, extra: Map::new() }
    }

    /// Add a description line.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach an extra host-visible field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder_chain() {
        let item = ListItem::new("Docs").with_description("Open documentation");
        assert_eq!(item.title, "Docs");
        assert_eq!(item.description.as_deref(), Some("Open documentation"));
        assert!(item.extra.is_empty());
    }

    #[test]
    fn test_extra_fields_serialize_flat() {
        let item = ListItem::new("Open Project")
            .with_description("Recent")
            .with_field("icon", "folder.png");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["title"], "Open Project");
        assert_eq!(json["description"], "Recent");
        assert_eq!(json["icon"], "folder.png");
    }

    #[test]
    fn test_missing_description_is_omitted() {
        let json = serde_json::to_value(ListItem::new("Bare")).unwrap();
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_round_trip_preserves_extras() {
        let item = ListItem::new("Row").with_field("url", "https://example.com");
        let json = serde_json::to_string(&item).unwrap();
        let back: ListItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
