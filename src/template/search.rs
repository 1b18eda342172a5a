//! Case-insensitive substring search over list items.

use super::item::ListItem;

/// Filter items whose `title` or `description` contains `word`,
/// case-insensitively.
///
/// An empty word is a pass-through of the whole list. Items without a
/// description never match on description. Input order is preserved and
/// nothing is deduplicated.
///
/// # Example
///
/// ```rust
/// use launchkit::{search_list, ListItem};
///
/// let items = vec![ListItem::new("Cat"), ListItem::new("Dog")];
/// let found = search_list(&items, "cat");
/// assert_eq!(found, vec![ListItem::new("Cat")]);
/// ```
pub fn search_list(list: &[ListItem], word: &str) -> Vec<ListItem> {
    if word.is_empty() {
        return list.to_vec();
    }
    let word = word.to_lowercase();
    list.iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&word)
                || item
                    .description
                    .as_ref()
                    .is_some_and(|description| description.to_lowercase().contains(&word))
        })
        .cloned()
        .collect()
}

/// Filter items that match every word in `words`, applying the single-word
/// filter successively in the given order.
///
/// Equivalent to folding [`search_list`] over the words; an empty word is a
/// no-op pass in the chain.
pub fn search_list_multi<I, S>(list: &[ListItem], words: I) -> Vec<ListItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filtered = list.to_vec();
    for word in words {
        filtered = search_list(&filtered, word.as_ref());
    }
    filtered
}
