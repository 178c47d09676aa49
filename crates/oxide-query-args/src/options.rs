//! The options mapping produced by a successful parse.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::option::ResultFormat;

/// Key of an entry in an [`OptionsMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    /// `as`: the requested row shape.
    As,
    /// `columnsvariable`: the caller's column-name variable.
    ColumnsVariable,
}

impl OptionKey {
    /// Returns the key as it appears in the mapping.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::As => "as",
            Self::ColumnsVariable => "columnsvariable",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered mapping of option keys to string values.
///
/// Setting a key that is already present replaces its value in place, so
/// keys keep the position they were first set at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsMap {
    entries: Vec<(OptionKey, String)>,
}

impl OptionsMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn put(&mut self, key: OptionKey, value: String) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Sets `as` to the canonical spelling of `format`.
    pub fn set_format(&mut self, format: ResultFormat) {
        self.put(OptionKey::As, format.as_str().to_string());
    }

    /// Sets `columnsvariable`.
    pub fn set_columns_variable(&mut self, name: impl Into<String>) {
        self.put(OptionKey::ColumnsVariable, name.into());
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: OptionKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: OptionKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns the requested row shape, or the default when `as` is unset.
    #[must_use]
    pub fn format(&self) -> ResultFormat {
        self.get(OptionKey::As)
            .and_then(|value| ResultFormat::lookup(value).ok())
            .unwrap_or_default()
    }

    /// Returns the column-name variable, if one was supplied.
    #[must_use]
    pub fn columns_variable(&self) -> Option<&str> {
        self.get(OptionKey::ColumnsVariable)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for OptionsMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let map = OptionsMap::new();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.format(), ResultFormat::Dicts);
        assert_eq!(map.columns_variable(), None);
    }

    #[test]
    fn test_insertion_order() {
        let mut map = OptionsMap::new();
        map.set_columns_variable("cols");
        map.set_format(ResultFormat::Lists);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("columnsvariable", "cols"), ("as", "lists")]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut map = OptionsMap::new();
        map.set_format(ResultFormat::Lists);
        map.set_columns_variable("a");
        map.set_format(ResultFormat::Dicts);
        map.set_columns_variable("b");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("as", "dicts"), ("columnsvariable", "b")]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_get_and_contains() {
        let mut map = OptionsMap::new();
        map.set_format(ResultFormat::Lists);
        assert_eq!(map.get(OptionKey::As), Some("lists"));
        assert!(map.contains_key(OptionKey::As));
        assert!(!map.contains_key(OptionKey::ColumnsVariable));
        assert_eq!(map.format(), ResultFormat::Lists);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut map = OptionsMap::new();
        map.set_columns_variable("cols");
        map.set_format(ResultFormat::Dicts);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"columnsvariable":"cols","as":"dicts"}"#
        );
    }
}
