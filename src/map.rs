//! Ordered property storage for objects.
//!
//! [`PropertyMap`] wraps an [`IndexMap`] so the own enumerable properties of an
//! [`Object`](crate::Object) keep their insertion order. Element attributes are
//! rendered in that order. The generic object encoder does not rely on it and
//! sorts the keys instead, see [`PropertyMap::sorted_keys`].
//!
//! ## Examples
//!
//! ```rust
//! use serialize_as_code::{PropertyMap, Value};
//!
//! let mut map = PropertyMap::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert("age", Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An insertion-ordered map of property names to values.
#[derive(Clone, Default)]
pub struct PropertyMap(IndexMap<String, Value>);

impl PropertyMap {
    /// Creates an empty `PropertyMap`.
    #[must_use]
    pub fn new() -> Self {
        PropertyMap(IndexMap::new())
    }

    /// Creates an empty `PropertyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropertyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a property, returning the previous value if the key was present.
    ///
    /// Overwriting a key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialize_as_code::{PropertyMap, Value};
    ///
    /// let mut map = PropertyMap::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert!(map.insert("key", Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map holds a property named `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a property, shifting later properties down to keep the order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the keys sorted lexicographically.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialize_as_code::{PropertyMap, Value};
    ///
    /// let mut map = PropertyMap::new();
    /// map.insert("isIt", Value::from(true));
    /// map.insert("foo", Value::from("bar"));
    /// assert_eq!(map.sorted_keys(), vec!["foo", "isIt"]);
    /// ```
    #[must_use]
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.0.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        PropertyMap(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut map = PropertyMap::new();
        map.insert("second", Value::from(2));
        map.insert("first", Value::from(1));
        map.insert("second", Value::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["second", "first"]);
        assert_eq!(map.get("second").and_then(|v| v.as_i64()), Some(3));
    }

    #[test]
    fn test_remove_shifts() {
        let map: PropertyMap = [("a", Value::from(1)), ("b", Value::from(2)), ("c", Value::from(3))]
            .into_iter()
            .collect();
        let mut map = map;
        assert!(map.remove("a").is_some());
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "c"]);
        assert!(!map.contains_key("a"));
    }
}
