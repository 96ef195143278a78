//! Case-insensitive search term matching.

use std::borrow::Cow;

/// An entity that can be matched by free-text search.
///
/// Implementors list the designated text fields a search box looks at; a
/// term matches when ANY of them contains it.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// A normalized search needle.
///
/// The raw input is trimmed and lower-cased once. A blank input produces an
/// empty term that matches everything, so an untouched search box never hides
/// rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchTerm(Option<String>);

impl SearchTerm {
    pub fn new(raw: Option<&str>) -> Self {
        let needle = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        Self(needle)
    }

    /// Whether the term filters nothing.
    pub fn is_blank(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether `haystack` contains the term, ignoring case.
    pub fn matches(&self, haystack: &str) -> bool {
        match &self.0 {
            None => true,
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Whether ANY of `fields` contains the term, ignoring case.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match &self.0 {
            None => true,
            Some(_) => fields.into_iter().any(|field| self.matches(field)),
        }
    }
}

impl SearchTerm {
    /// Whether any designated field of `item` contains the term.
    pub fn matches_item<T>(&self, item: &T) -> bool
    where
        T: Searchable + ?Sized,
    {
        if self.is_blank() {
            return true;
        }
        let fields = item.search_fields();
        self.matches_any(fields.iter().map(|field| &**field))
    }
}

impl From<&str> for SearchTerm {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw))
    }
}

impl From<Option<&str>> for SearchTerm {
    fn from(raw: Option<&str>) -> Self {
        Self::new(raw)
    }
}
