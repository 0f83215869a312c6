//! Insertion-ordered series of unique keys mapped to optional numbers

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};

use super::table::CellValue;

/// A series key: integer or text
///
/// Keys are totally ordered and hashable; integer keys sort before text keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

/// Read access to an insertion-ordered unique-key series
///
/// Positional accessors answer `None` for an out-of-bounds index and for a
/// null value, mirroring the [`Table`](super::table::Table) capability.
pub trait KeyedValues {
    /// Number of entries
    fn item_count(&self) -> usize;

    /// Key at the given position
    fn key_at(&self, index: usize) -> Option<&Key>;

    /// Numeric value at the given position, `None` when null or out of bounds
    fn value_at(&self, index: usize) -> Option<f64>;

    /// Position of the given key
    fn index_of(&self, key: &Key) -> Option<usize>;
}

/// Insertion-ordered series with unique keys
#[derive(Debug, Clone, Default)]
pub struct KeySeries {
    entries: IndexMap<Key, CellValue, FxBuildHasher>,
}

impl KeySeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }

    /// Insert or replace a value
    ///
    /// Replacing an existing key keeps the key's original position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<CellValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Build a series from (key, value) pairs
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Key>,
        V: Into<CellValue>,
    {
        let mut series = Self::new();
        for (key, value) in pairs {
            series.insert(key, value);
        }
        series
    }

    /// Cell at the given position
    pub fn cell_at(&self, index: usize) -> Option<&CellValue> {
        self.entries.get_index(index).map(|(_, value)| value)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &CellValue)> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the series has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyedValues for KeySeries {
    fn item_count(&self) -> usize {
        self.entries.len()
    }

    fn key_at(&self, index: usize) -> Option<&Key> {
        self.entries.get_index(index).map(|(key, _)| key)
    }

    fn value_at(&self, index: usize) -> Option<f64> {
        self.entries.get_index(index).and_then(|(_, value)| value.as_f64())
    }

    fn index_of(&self, key: &Key) -> Option<usize> {
        self.entries.get_index_of(key)
    }
}
