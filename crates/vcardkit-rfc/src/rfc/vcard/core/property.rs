//! Insertion-ordered property storage.

use std::collections::HashMap;

/// Ordered mapping from raw property key to raw value.
///
/// Keys carry their group and parameters verbatim (e.g. `item3.TEL;PREF=1;TYPE=cell`)
/// and are compared case-sensitively. Writing an existing key replaces its value
/// in place, so the key keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyStore {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl PropertyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` under `key`, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        if let Some(&pos) = self.positions.get(&key) {
            self.entries[pos].1 = value;
        } else {
            self.positions.insert(key.clone(), self.entries.len());
            self.entries.push((key, value));
        }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        let &pos = self.positions.get(key)?;
        Some(self.entries[pos].1.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for PropertyStore {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Property keys written by the builder.
pub mod names {
    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const VERSION: &str = "VERSION";
    pub const END: &str = "END";

    // Single properties
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const ORG: &str = "ORG";
    pub const TITLE: &str = "TITLE";
    pub const NOTE: &str = "NOTE";
    pub const PHOTO: &str = "PHOTO";

    // Item group members
    pub const X_ABLABEL: &str = "X-ABLABEL";
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";
    pub const URL: &str = "URL";
    pub const ADR: &str = "ADR";

    /// Value of `BEGIN` and `END`.
    pub const VCARD: &str = "VCARD";
    /// Value of `VERSION`.
    pub const VERSION_3_0: &str = "3.0";
}
