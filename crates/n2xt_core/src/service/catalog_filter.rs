//! Catalog filter predicate for tagged listing items.

/// Filter value that keeps every item visible.
pub const FILTER_ALL: &str = "all";

/// Returns whether an item tagged `item_tag` stays visible under `selected`.
pub fn matches_filter(item_tag: &str, selected: &str) -> bool {
    selected == FILTER_ALL || item_tag == selected
}

/// Returns the visible items in their original order.
pub fn filter_visible<'a, T>(
    items: &'a [T],
    selected: &str,
    tag_of: impl Fn(&T) -> &str,
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_filter(tag_of(*item), selected))
        .collect()
}
