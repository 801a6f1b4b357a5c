//! The insertion-ordered arbitrary-key map.

use rustc_hash::FxHashMap;
use thiserror::Error;

use coll_value::Value;

use crate::canon::{canonicalize, CanonKey};

/// Lookup or removal by an absent key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key not found: {key}")]
pub struct KeyNotFound {
    /// Rendering of the missing key.
    pub key: String,
}

impl KeyNotFound {
    fn new(key: &Value) -> Self {
        KeyNotFound {
            key: key.to_string(),
        }
    }
}

/// One owned key-value association.
///
/// The entry owns its own handles to key and value; later mutation of the
/// caller's copies (there is none — payloads are immutable) can never
/// change what the store holds.
#[derive(Clone, Debug)]
pub struct StoredEntry {
    key: Value,
    value: Value,
}

impl StoredEntry {
    /// The key, as originally inserted.
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// The associated value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Insertion-ordered map from arbitrary runtime values to values.
///
/// An ordered entry list plus a canonical-key position index: O(1) average
/// lookup, O(1) amortized append, overwrite-on-duplicate-key in place.
/// Iteration order is insertion order; it changes only when a brand-new
/// key is appended or an entry is removed (later entries shift up,
/// relative order preserved). Overwriting an existing key keeps its
/// original position.
#[derive(Clone, Debug, Default)]
pub struct AssocStore {
    entries: Vec<StoredEntry>,
    index: FxHashMap<CanonKey, usize>,
}

impl AssocStore {
    /// Create an empty store.
    pub fn new() -> Self {
        AssocStore::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the store empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &Value) -> Result<&Value, KeyNotFound> {
        self.position(key)
            .map(|pos| &self.entries[pos].value)
            .ok_or_else(|| KeyNotFound::new(key))
    }

    /// Does `key` have an entry?
    pub fn exists(&self, key: &Value) -> bool {
        self.position(key).is_some()
    }

    /// Insert or overwrite.
    ///
    /// A brand-new key appends at the end. An existing key has its entry
    /// replaced in place — position preserved — and the previous value is
    /// returned.
    pub fn set(&mut self, key: Value, value: Value) -> Option<Value> {
        use std::collections::hash_map::Entry;

        let canon = canonicalize(&key);
        match self.index.entry(canon) {
            Entry::Occupied(slot) => {
                let pos = *slot.get();
                tracing::trace!(pos, "overwriting existing key");
                let previous = std::mem::replace(&mut self.entries[pos], StoredEntry { key, value });
                Some(previous.value)
            }
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(StoredEntry { key, value });
                None
            }
        }
    }

    /// Remove the entry for `key`, returning its value.
    ///
    /// Entries after the removed one shift up; their relative order is
    /// preserved and the position index is rebased.
    pub fn remove(&mut self, key: &Value) -> Result<Value, KeyNotFound> {
        let canon = canonicalize(key);
        let pos = self
            .index
            .remove(&canon)
            .ok_or_else(|| KeyNotFound::new(key))?;
        tracing::trace!(pos, "removing key");
        let entry = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Ok(entry.value)
    }

    /// Iterate `(key, value)` pairs in insertion order.
    ///
    /// Each call starts a fresh iteration; reads (`get`, `exists`) never
    /// disturb the order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(StoredEntry::key)
    }

    /// Iterate values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(StoredEntry::value)
    }

    /// The entries themselves, in insertion order.
    pub fn entries(&self) -> &[StoredEntry] {
        &self.entries
    }

    fn position(&self, key: &Value) -> Option<usize> {
        // The bucket narrows the search; the exact token decides the hit.
        self.index.get(&canonicalize(key)).copied()
    }
}

#[cfg(test)]
mod tests;
