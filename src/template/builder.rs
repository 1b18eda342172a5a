//! Template descriptions and the builder that compiles them.

use std::cell::RefCell;
use std::rc::Rc;

use super::action::Action;
use super::export::{
    CompiledExport, EnterFn, ExportArgs, ExportMode, Render, SearchFn, SelectFn, TemplateExports,
};
use super::item::ListItem;
use super::search::search_list;

/// Template with no visible list: a single entry action.
///
/// # Example
///
/// ```rust
/// use launchkit::{Action, NoneTemplate};
///
/// let template = NoneTemplate::new("lock-screen", |_action: &Action| {
///     // lock the screen
/// });
/// ```
pub struct NoneTemplate {
    pub(crate) code: String,
    pub(crate) enter: Box<dyn FnMut(&Action)>,
}

impl NoneTemplate {
    /// Create a no-UI template for `code` with its entry action.
    pub fn new(code: impl Into<String>, enter: impl FnMut(&Action) + 'static) -> Self {
        Self { code: code.into(), enter: Box::new(enter) }
    }

    /// The template code this entry registers under.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// One row of an [`ImmutableListTemplate`]: the displayed item plus the
/// handler invoked when the user selects it.
pub struct ImmutableListItem {
    pub(crate) item: ListItem,
    pub(crate) handler: Box<dyn FnMut(&Action)>,
}

impl ImmutableListItem {
    /// Pair an item with its selection handler.
    pub fn new(item: ListItem, handler: impl FnMut(&Action) + 'static) -> Self {
        Self { item, handler: Box::new(handler) }
    }

    /// The displayed item.
    pub fn item(&self) -> &ListItem {
        &self.item
    }
}

/// Template whose list is fixed at construction.
///
/// `enter` renders the full list; the default search filters it with
/// [`search_list`]; selecting a row invokes that row's handler.
pub struct ImmutableListTemplate {
    pub(crate) code: String,
    pub(crate) placeholder: Option<String>,
    pub(crate) items: Vec<ImmutableListItem>,
    pub(crate) search: Option<SearchFn>,
}

impl ImmutableListTemplate {
    /// Create an empty fixed-list template for `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), placeholder: None, items: Vec::new(), search: None }
    }

    /// Set the search-box placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Append an item with its selection handler.
    #[must_use]
    pub fn with_item(mut self, item: ListItem, handler: impl FnMut(&Action) + 'static) -> Self {
        self.items.push(ImmutableListItem::new(item, handler));
        self
    }

    /// Append pre-built rows.
    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = ImmutableListItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Replace the default search with a custom callback.
    #[must_use]
    pub fn with_search(
        mut self,
        search: impl FnMut(&Action, &str, Render<'_>) + 'static,
    ) -> Self {
        self.search = Some(Box::new(search));
        self
    }

    /// The template code this entry registers under.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Template whose list is produced at runtime by its own `enter`.
///
/// The compiled export caches whatever `enter` renders so the default
/// search has a list to filter; the cache lives in the export, not in the
/// template value.
pub struct MutableListTemplate {
    pub(crate) code: String,
    pub(crate) placeholder: Option<String>,
    pub(crate) enter: EnterFn,
    pub(crate) select: SelectFn,
    pub(crate) search: Option<SearchFn>,
}

impl MutableListTemplate {
    /// Create a dynamic-list template for `code` with its entry and
    /// selection callbacks.
    pub fn new(
        code: impl Into<String>,
        enter: impl FnMut(&Action, Render<'_>) + 'static,
        select: impl FnMut(&Action, &ListItem) + 'static,
    ) -> Self {
        Self {
            code: code.into(),
            placeholder: None,
            enter: Box::new(enter),
            select: Box::new(select),
            search: None,
        }
    }

    /// Set the search-box placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Replace the default search with a custom callback.
    #[must_use]
    pub fn with_search(
        mut self,
        search: impl FnMut(&Action, &str, Render<'_>) + 'static,
    ) -> Self {
        self.search = Some(Box::new(search));
        self
    }

    /// The template code this entry registers under.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// Fluent accumulator that compiles template descriptions into
/// [`TemplateExports`].
///
/// Each registration method accepts any number of templates and can be
/// called repeatedly; results accumulate into one mapping keyed by template
/// `code`. A later registration with a colliding `code` silently replaces
/// the earlier one.
///
/// # Example
///
/// ```rust
/// use launchkit::{Action, ListItem, NoneTemplate, ImmutableListTemplate, TemplateBuilder};
///
/// let exports = TemplateBuilder::new()
///     .none([NoneTemplate::new("empty-trash", |_action: &Action| {})])
///     .immutable_list([ImmutableListTemplate::new("bookmarks")
///         .with_item(ListItem::new("Docs"), |_action: &Action| {})])
///     .build();
///
/// assert_eq!(exports.len(), 2);
/// ```
#[derive(Default)]
pub struct TemplateBuilder {
    exports: TemplateExports,
}

impl TemplateBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register no-UI templates.
    #[must_use]
    pub fn none(mut self, templates: impl IntoIterator<Item = NoneTemplate>) -> Self {
        for template in templates {
            let NoneTemplate { code, mut enter } = template;
            let args = ExportArgs {
                enter: Box::new(move |action: &Action, _render: &mut dyn FnMut(Vec<ListItem>)| {
                    enter(action);
                }),
                search: None,
                select: None,
                placeholder: None,
            };
            self.insert(code, CompiledExport::new(ExportMode::None, args));
        }
        self
    }

    /// Register fixed-list templates.
    #[must_use]
    pub fn immutable_list(
        mut self,
        templates: impl IntoIterator<Item = ImmutableListTemplate>,
    ) -> Self {
        for template in templates {
            let ImmutableListTemplate { code, placeholder, items, search } = template;
            let list: Rc<Vec<ListItem>> =
                Rc::new(items.iter().map(|entry| entry.item.clone()).collect());

            let enter_list = Rc::clone(&list);
            let enter: EnterFn =
                Box::new(move |_action: &Action, render: &mut dyn FnMut(Vec<ListItem>)| {
                    render((*enter_list).clone());
                });

            let search: SearchFn = search.unwrap_or_else(|| {
                let list = Rc::clone(&list);
                Box::new(
                    move |_action: &Action, word: &str, render: &mut dyn FnMut(Vec<ListItem>)| {
                        render(search_list(&list, word));
                    },
                )
            });

            let mut entries = items;
            let select: SelectFn = Box::new(move |action: &Action, chosen: &ListItem| {
                match entries.iter_mut().find(|entry| entry.item == *chosen) {
                    Some(entry) => (entry.handler)(action),
                    None => tracing::warn!(
                        title = %chosen.title,
                        "selected item is not part of the fixed list"
                    ),
                }
            });

            let args = ExportArgs {
                enter,
                search: Some(search),
                select: Some(select),
                placeholder,
            };
            self.insert(code, CompiledExport::new(ExportMode::List, args));
        }
        self
    }

    /// Register dynamic-list templates.
    #[must_use]
    pub fn mutable_list(
        mut self,
        templates: impl IntoIterator<Item = MutableListTemplate>,
    ) -> Self {
        for template in templates {
            let MutableListTemplate { code, placeholder, enter, select, search } = template;

            // state cell shared by the enter wrapper and the default search;
            // this is the export's cache, never a mutation of caller data
            let cache: Rc<RefCell<Vec<ListItem>>> = Rc::new(RefCell::new(Vec::new()));

            let mut enter_inner = enter;
            let enter_cache = Rc::clone(&cache);
            let enter: EnterFn =
                Box::new(move |action: &Action, render: &mut dyn FnMut(Vec<ListItem>)| {
                    let mut caching_render = |list: Vec<ListItem>| {
                        *enter_cache.borrow_mut() = list.clone();
                        render(list);
                    };
                    enter_inner(action, &mut caching_render);
                });

            let search: SearchFn = search.unwrap_or_else(|| {
                let cache = Rc::clone(&cache);
                Box::new(
                    move |_action: &Action, word: &str, render: &mut dyn FnMut(Vec<ListItem>)| {
                        let filtered = search_list(&cache.borrow(), word);
                        render(filtered);
                    },
                )
            });

            let args = ExportArgs {
                enter,
                search: Some(search),
                select: Some(select),
                placeholder,
            };
            self.insert(code, CompiledExport::new(ExportMode::List, args));
        }
        self
    }

    /// Return the accumulated mapping from `code` to compiled export.
    pub fn build(self) -> TemplateExports {
        self.exports
    }

    fn insert(&mut self, code: String, export: CompiledExport) {
        if self.exports.contains_key(&code) {
            tracing::debug!(%code, "template code registered twice, keeping the later one");
        }
        self.exports.insert(code, export);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn collect(render_target: &mut Vec<ListItem>) -> impl FnMut(Vec<ListItem>) + '_ {
        move |list| *render_target = list
    }

    fn titles(list: &[ListItem]) -> Vec<&str> {
        list.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_none_template_forwards_enter() {
        let entered = Rc::new(Cell::new(0));
        let counter = Rc::clone(&entered);
        let mut exports = TemplateBuilder::new()
            .none([NoneTemplate::new("lock", move |_action: &Action| {
                counter.set(counter.get() + 1);
            })])
            .build();

        let export = exports.get_mut("lock").unwrap();
        assert_eq!(export.mode(), ExportMode::None);
        assert!(export.placeholder().is_none());

        let mut rendered = Vec::new();
        export.enter(&Action::new("lock"), &mut collect(&mut rendered));
        assert_eq!(entered.get(), 1);
        assert!(rendered.is_empty(), "none templates never render");

        // search and select are absent and must be no-ops
        export.search(&Action::new("lock"), "x", &mut collect(&mut rendered));
        export.select(&Action::new("lock"), &ListItem::new("x"));
        assert_eq!(entered.get(), 1);
    }

    #[test]
    fn test_immutable_enter_renders_the_fixed_list() {
        let template = ImmutableListTemplate::new("bookmarks")
            .with_item(ListItem::new("Docs"), |_action: &Action| {})
            .with_item(ListItem::new("Issues"), |_action: &Action| {});
        let mut exports = TemplateBuilder::new().immutable_list([template]).build();
        let export = exports.get_mut("bookmarks").unwrap();

        assert_eq!(export.mode(), ExportMode::List);
        let mut rendered = Vec::new();
        export.enter(&Action::new("bookmarks"), &mut collect(&mut rendered));
        assert_eq!(titles(&rendered), ["Docs", "Issues"]);
    }

    #[test]
    fn test_immutable_default_search_empty_word_returns_all_in_order() {
        let template = ImmutableListTemplate::new("bookmarks")
            .with_item(ListItem::new("Docs"), |_action: &Action| {})
            .with_item(ListItem::new("Issues"), |_action: &Action| {});
        let mut exports = TemplateBuilder::new().immutable_list([template]).build();
        let export = exports.get_mut("bookmarks").unwrap();

        let mut rendered = Vec::new();
        export.search(&Action::new("bookmarks"), "", &mut collect(&mut rendered));
        assert_eq!(titles(&rendered), ["Docs", "Issues"]);
    }

    #[test]
    fn test_immutable_default_search_filters() {
        let template = ImmutableListTemplate::new("bookmarks")
            .with_item(ListItem::new("Docs"), |_action: &Action| {})
            .with_item(ListItem::new("Issues"), |_action: &Action| {});
        let mut exports = TemplateBuilder::new().immutable_list([template]).build();
        let export = exports.get_mut("bookmarks").unwrap();

        let mut rendered = Vec::new();
        export.search(&Action::new("bookmarks"), "doc", &mut collect(&mut rendered));
        assert_eq!(titles(&rendered), ["Docs"]);
    }

    #[test]
    fn test_immutable_custom_search_bypasses_default() {
        let template = ImmutableListTemplate::new("bookmarks")
            .with_item(ListItem::new("Docs"), |_action: &Action| {})
            .with_search(|_action: &Action, word: &str, render: Render<'_>| {
                render(vec![ListItem::new(format!("custom:{word}"))]);
            });
        let mut exports = TemplateBuilder::new().immutable_list([template]).build();
        let export = exports.get_mut("bookmarks").unwrap();

        let mut rendered = Vec::new();
        export.search(&Action::new("bookmarks"), "zzz", &mut collect(&mut rendered));
        assert_eq!(titles(&rendered), ["custom:zzz"]);
    }

    #[test]
    fn test_immutable_select_invokes_matching_handler() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let template = ImmutableListTemplate::new("bookmarks")
            .with_item(ListItem::new("Docs"), move |_action: &Action| {
                counter.set(counter.get() + 1);
            })
            .with_item(ListItem::new("Issues"), |_action: &Action| {});
        let mut exports = TemplateBuilder::new().immutable_list([template]).build();
        let export = exports.get_mut("bookmarks").unwrap();

        export.select(&Action::new("bookmarks"), &ListItem::new("Docs"));
        assert_eq!(hits.get(), 1);

        // unknown items are ignored
        export.select(&Action::new("bookmarks"), &ListItem::new("Nope"));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_immutable_placeholder_is_forwarded() {
        let template =
            ImmutableListTemplate::new("bookmarks").with_placeholder("Search bookmarks");
        let exports = TemplateBuilder::new().immutable_list([template]).build();
        assert_eq!(exports["bookmarks"].placeholder(), Some("Search bookmarks"));
    }

    #[test]
    fn test_mutable_render_is_cached_for_default_search() {
        let template = MutableListTemplate::new(
            "recent",
            |_action: &Action, render: Render<'_>| render(vec![ListItem::new("X")]),
            |_action: &Action, _item: &ListItem| {},
        );
        let mut exports = TemplateBuilder::new().mutable_list([template]).build();
        let export = exports.get_mut("recent").unwrap();

        let mut rendered = Vec::new();
        export.enter(&Action::new("recent"), &mut collect(&mut rendered));
        assert_eq!(titles(&rendered), ["X"]);

        let mut found = Vec::new();
        export.search(&Action::new("recent"), "x", &mut collect(&mut found));
        assert_eq!(found, vec![ListItem::new("X")]);
    }

    #[test]
    fn test_mutable_default_search_before_first_render_sees_empty_list() {
        let template = MutableListTemplate::new(
            "recent",
            |_action: &Action, render: Render<'_>| render(vec![ListItem::new("X")]),
            |_action: &Action, _item: &ListItem| {},
        );
        let mut exports = TemplateBuilder::new().mutable_list([template]).build();
        let export = exports.get_mut("recent").unwrap();

        let mut rendered = vec![ListItem::new("sentinel")];
        export.search(&Action::new("recent"), "x", &mut collect(&mut rendered));
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_mutable_later_render_replaces_the_cache() {
        let round = Rc::new(Cell::new(0));
        let counter = Rc::clone(&round);
        let template = MutableListTemplate::new(
            "recent",
            move |_action: &Action, render: Render<'_>| {
                counter.set(counter.get() + 1);
                render(vec![ListItem::new(format!("round-{}", counter.get()))]);
            },
            |_action: &Action, _item: &ListItem| {},
        );
        let mut exports = TemplateBuilder::new().mutable_list([template]).build();
        let export = exports.get_mut("recent").unwrap();

        let mut rendered = Vec::new();
        export.enter(&Action::new("recent"), &mut collect(&mut rendered));
        export.enter(&Action::new("recent"), &mut collect(&mut rendered));

        let mut found = Vec::new();
        export.search(&Action::new("recent"), "round", &mut collect(&mut found));
        assert_eq!(titles(&found), ["round-2"]);
    }

    #[test]
    fn test_mutable_select_forwards_action_and_item() {
        let selected = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&selected);
        let template = MutableListTemplate::new(
            "recent",
            |_action: &Action, _render: Render<'_>| {},
            move |action: &Action, item: &ListItem| {
                *sink.borrow_mut() = Some((action.code.clone(), item.title.clone()));
            },
        );
        let mut exports = TemplateBuilder::new().mutable_list([template]).build();
        let export = exports.get_mut("recent").unwrap();

        export.select(&Action::new("recent"), &ListItem::new("Row"));
        assert_eq!(
            selected.borrow().clone(),
            Some(("recent".to_string(), "Row".to_string()))
        );
    }

    #[test]
    fn test_mutable_custom_search_bypasses_cache() {
        let template = MutableListTemplate::new(
            "recent",
            |_action: &Action, render: Render<'_>| render(vec![ListItem::new("cached")]),
            |_action: &Action, _item: &ListItem| {},
        )
        .with_search(|_action: &Action, _word: &str, render: Render<'_>| {
            render(vec![ListItem::new("custom")]);
        });
        let mut exports = TemplateBuilder::new().mutable_list([template]).build();
        let export = exports.get_mut("recent").unwrap();

        let mut rendered = Vec::new();
        export.enter(&Action::new("recent"), &mut collect(&mut rendered));

        let mut found = Vec::new();
        export.search(&Action::new("recent"), "cached", &mut collect(&mut found));
        assert_eq!(titles(&found), ["custom"]);
    }

    #[test]
    fn test_duplicate_code_keeps_the_later_registration() {
        let exports = TemplateBuilder::new()
            .none([NoneTemplate::new("dup", |_action: &Action| {})])
            .immutable_list([
                ImmutableListTemplate::new("dup").with_item(ListItem::new("Row"), |_: &Action| {})
            ])
            .build();

        assert_eq!(exports.len(), 1);
        assert_eq!(exports["dup"].mode(), ExportMode::List);
    }

    #[test]
    fn test_registration_methods_accumulate_across_calls() {
        let exports = TemplateBuilder::new()
            .none([NoneTemplate::new("a", |_action: &Action| {})])
            .none([NoneTemplate::new("b", |_action: &Action| {})])
            .mutable_list([MutableListTemplate::new(
                "c",
                |_action: &Action, _render: Render<'_>| {},
                |_action: &Action, _item: &ListItem| {},
            )])
            .build();

        assert_eq!(exports.len(), 3);
        assert_eq!(exports["a"].mode(), ExportMode::None);
        assert_eq!(exports["c"].mode(), ExportMode::List);
    }
}
