//! Insertion-ordered string map used for cookies and headers.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A flat name/value map that preserves insertion order.
///
/// Keys are unique with exact-string equality; inserting an existing key
/// updates its value in place (last write wins) without changing its
/// position. Iteration yields entries in insertion order, which keeps the
/// serialized JSON deterministic.
///
/// Values may carry session secrets, so the `Debug` output redacts them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    /// Entries as (name, value) pairs in insertion order.
    entries: Vec<(String, String)>,
}

impl FieldMap {
    /// Creates a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a name/value pair, overwriting the value on an exact key match.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some((_, v)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            *v = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the value for an exact key match.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of entries.
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

impl IntoIterator for FieldMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Extend<(String, String)> for FieldMap {
    fn extend<T: IntoIterator<Item = (String, String)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// Custom Debug impl that redacts values.
impl fmt::Debug for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, _) in &self.entries {
            map.entry(name, &"[REDACTED]");
        }
        map.finish()
    }
}
