//! Generic predicate filtering shared by every feature module.
//!
//! A filter is a search term (matched against the entity's
//! [`Searchable::search_fields`]) AND a categorical predicate. The output
//! keeps the relative order of the input and borrows from it.

use linarqa_core::{SearchTerm, Searchable};

/// Keeps the items that match `search` and satisfy `predicate`.
///
/// Accepts anything that yields `&T`, so a filtered view can be filtered
/// again without cloning.
pub fn filter_items<'a, T, I, P>(items: I, search: &SearchTerm, predicate: P) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
    P: Fn(&T) -> bool,
{
    items
        .into_iter()
        .filter(|item| search.matches_item(*item) && predicate(*item))
        .collect()
}

/// Exact match against an optional criterion; `None` accepts everything.
#[inline]
pub fn matches_criterion<V>(criterion: Option<&V>, value: &V) -> bool
where
    V: PartialEq + ?Sized,
{
    criterion.is_none_or(|expected| expected == value)
}
