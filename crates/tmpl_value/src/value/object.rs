//! Ordered, first-wins object storage.

use std::fmt;

use indexmap::map::{Iter, Keys, Values};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::Value;

/// Ordered mapping of case-sensitive string keys to values.
///
/// Keys are unique. Insertion never overwrites: the first value recorded for
/// a key wins and later duplicates are dropped. Iteration follows insertion
/// order.
#[derive(Clone, Default)]
pub struct ObjectMap(IndexMap<String, Value, FxBuildHasher>);

impl ObjectMap {
    pub fn new() -> Self {
        ObjectMap(IndexMap::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity_and_hasher(
            capacity,
            FxBuildHasher,
        ))
    }

    /// Record `value` under `key` unless the key is already present.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn insert_first(&mut self, key: impl Into<String>, value: Value) -> bool {
        match self.0.entry(key.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> Values<'_, String, Value> {
        self.0.values()
    }
}

/// Exact representation: same entries in the same order.
impl PartialEq for ObjectMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl Eq for ObjectMap {}

impl fmt::Debug for ObjectMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ObjectMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = ObjectMap::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.insert_first(key, value.into());
        }
        map
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for ObjectMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_first(key, value.into());
        }
    }
}

impl<'a> IntoIterator for &'a ObjectMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
