//! Ordered sequence of values with shared-reference semantics.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::value::Value;

/// Ordered, growable sequence of values
///
/// Internally `Arc<RwLock<Vec<Value>>>`: clones share the same underlying
/// storage, so a sequence pushed into itself is representable and identity
/// comparison (`same_ref`) is well-defined. Traversals take a [`snapshot`]
/// under a short read lock and release it before recursing, so cyclic
/// structures never deadlock.
///
/// [`snapshot`]: Sequence::snapshot
#[derive(Clone)]
pub struct Sequence {
    inner: Arc<RwLock<Vec<Value>>>,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create from an existing vector of values
    pub fn from_vec(items: Vec<Value>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    /// Get the number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Get a clone of the item at `index`
    pub fn get(&self, index: usize) -> Option<Value> {
        self.inner.read().get(index).cloned()
    }

    /// Append a value
    pub fn push(&self, value: Value) {
        self.inner.write().push(value);
    }

    /// Clone the current contents
    ///
    /// The lock is released before this returns, so callers can recurse
    /// into the snapshot freely.
    pub fn snapshot(&self) -> Vec<Value> {
        self.inner.read().clone()
    }

    /// Concatenate with another sequence into a fresh one
    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut items = self.snapshot();
        items.extend(other.snapshot());
        Sequence::from_vec(items)
    }

    /// Check whether two handles share the same underlying storage
    #[inline]
    pub fn same_ref(&self, other: &Sequence) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Allocation address, used as the identity key for cycle detection
    #[inline]
    pub(crate) fn address(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

// Identity, not contents: contents equality is undecidable on cyclic
// structures, and matches the reference semantics of the handle.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.same_ref(other)
    }
}

impl Eq for Sequence {}

// Non-recursive on purpose: a derived Debug would loop on self-referential
// sequences.
impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence(len = {})", self.len())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} items]", self.len())
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}
