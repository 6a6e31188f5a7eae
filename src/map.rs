//! Ordered map type for jon objects.
//!
//! This module provides [`JonMap`], a wrapper around [`IndexMap`] that keeps
//! object entries in insertion order. Iteration order is visible through
//! `dump` and `flatten`, so a deterministic, insertion-ordered map keeps both
//! stable across round trips.
//!
//! ## Examples
//!
//! ```rust
//! use jon::{JonMap, Value};
//!
//! let mut map = JonMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to jon values.
///
/// # Examples
///
/// ```rust
/// use jon::{JonMap, Value};
///
/// let mut map = JonMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JonMap(IndexMap<String, crate::Value>);

impl JonMap {
    /// Creates an empty `JonMap`.
    #[must_use]
    pub fn new() -> Self {
        JonMap(IndexMap::new())
    }

    /// Creates an empty `JonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the entry keeps its original position.
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut crate::Value> {
        self.0.get_mut(key)
    }

    /// Returns the value for `key`, inserting [`crate::Value::Null`] first if
    /// the key is missing.
    pub fn or_insert_null(&mut self, key: &str) -> &mut crate::Value {
        self.0
            .entry(key.to_string())
            .or_insert(crate::Value::Null)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, preserving the order of remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }

    /// Returns a mutable iterator over the key-value pairs of the map.
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, crate::Value> {
        self.0.iter_mut()
    }
}

impl From<HashMap<String, crate::Value>> for JonMap {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        JonMap(map.into_iter().collect())
    }
}

impl From<JonMap> for HashMap<String, crate::Value> {
    fn from(map: JonMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for JonMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JonMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for JonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        JonMap(IndexMap::from_iter(iter))
    }
}
