use std::collections::BTreeMap;

use super::record::Record;

/// Per-field text filters combined with logical AND.
///
/// Each entry maps a field name to a fragment that the field's text form must
/// contain. Empty fragments are kept as entries and match every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    fragments: BTreeMap<String, String>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`Filters::set`].
    pub fn with(mut self, field: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.set(field, fragment);
        self
    }

    /// Replace the fragment for `field`.
    pub fn set(&mut self, field: impl Into<String>, fragment: impl Into<String>) {
        self.fragments.insert(field.into(), fragment.into());
    }

    /// Drop `field` from the filter set entirely.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fragments.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fragments.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Fields whose fragment is non-empty, i.e. the ones that can reject rows.
    pub fn active_fields(&self) -> impl Iterator<Item = &str> {
        self.fragments
            .iter()
            .filter(|(_, fragment)| !fragment.is_empty())
            .map(|(field, _)| field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fragments
            .iter()
            .map(|(field, fragment)| (field.as_str(), fragment.as_str()))
    }

    /// Whether `record` passes every filter. Matching is case-sensitive.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.fragments
            .iter()
            .all(|(field, fragment)| record.field(field).to_text().contains(fragment.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Filters
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fragments: iter
                .into_iter()
                .map(|(field, fragment)| (field.into(), fragment.into()))
                .collect(),
        }
    }
}
