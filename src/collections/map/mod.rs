//! Insertion-ordered key-value map with shared-reference semantics.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::core::value::Value;

/// Key-value map that iterates in insertion order
///
/// Iteration order is load-bearing: the concatenation aggregation mode
/// produces different numbers for different key orders, so the map must
/// preserve the order entries were inserted in (`IndexMap`, not a hashed
/// or sorted map).
///
/// Internally `Arc<RwLock<IndexMap<..>>>`: clones share storage, so a map
/// can contain itself and identity comparison is well-defined.
#[derive(Clone)]
pub struct Map {
    inner: Arc<RwLock<IndexMap<String, Value>>>,
}

impl Map {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create from key-value pairs, keeping their order
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        Self {
            inner: Arc::new(RwLock::new(entries.into_iter().collect())),
        }
    }

    /// Get the number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get a clone of the value for `key`
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.read().get(key).cloned()
    }

    /// Check if key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Insert a key-value pair
    ///
    /// A new key goes to the end of the iteration order; an existing key
    /// keeps its position.
    pub fn insert(&self, key: impl Into<String>, value: Value) {
        self.inner.write().insert(key.into(), value);
    }

    /// Clone the current entries in iteration order
    ///
    /// The lock is released before this returns, so callers can recurse
    /// into the snapshot freely.
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Clone the keys in iteration order
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().keys().cloned().collect()
    }

    /// Clone the values in iteration order
    pub fn values(&self) -> Vec<Value> {
        self.inner.read().values().cloned().collect()
    }

    /// Shallow-merge with another map into a fresh one (right wins)
    pub fn merge(&self, other: &Map) -> Map {
        let merged = Map::from_entries(self.entries());
        for (k, v) in other.entries() {
            merged.insert(k, v);
        }
        merged
    }

    /// Check whether two handles share the same underlying storage
    #[inline]
    pub fn same_ref(&self, other: &Map) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Allocation address, used as the identity key for cycle detection
    #[inline]
    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

// Identity, not contents: see `Sequence`.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.same_ref(other)
    }
}

impl Eq for Map {}

// Non-recursive on purpose: a derived Debug would loop on self-referential
// maps.
impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Map(len = {})", self.len())
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} keys}}", self.len())
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
