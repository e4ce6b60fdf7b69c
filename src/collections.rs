//! Keyed collections with host deduplication semantics.
//!
//! [`ValueSet`] and [`ValueMap`] keep insertion order and deduplicate by
//! SameValueZero: primitives compare by value (NaN equals NaN, `+0` equals
//! `-0`), objects by identity. Inserting an existing key keeps its position and
//! replaces the stored entry, so duplicates collapse to the last one inserted.
//!
//! ```rust
//! use serialize_as_code::{Value, ValueMap};
//!
//! let mut map = ValueMap::new();
//! map.insert(Value::from("foo"), Value::from("bar"));
//! map.insert(Value::from("foo"), Value::from(3));
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get(&Value::from("foo")).and_then(|v| v.as_i64()), Some(3));
//! ```

use crate::value::{Identity, Number};
use crate::Value;
use indexmap::IndexMap;
use num_bigint::BigInt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum ValueKey {
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    Float(u64),
    BigInt(BigInt),
    String(String),
    RegisteredSymbol(String),
    Window,
    Document,
    Reference(Identity),
}

impl ValueKey {
    fn of(value: &Value) -> Self {
        match value {
            Value::Undefined => ValueKey::Undefined,
            Value::Null => ValueKey::Null,
            Value::Bool(b) => ValueKey::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ValueKey::Integer(i),
                None if n.as_f64().is_nan() => ValueKey::Float(f64::NAN.to_bits()),
                None => ValueKey::Float(n.as_f64().to_bits()),
            },
            Value::BigInt(b) => ValueKey::BigInt(b.clone()),
            Value::String(s) => ValueKey::String(s.clone()),
            Value::Symbol(s) => match s.key_for() {
                Some(key) => ValueKey::RegisteredSymbol(key.to_string()),
                None => ValueKey::Reference(s.identity()),
            },
            Value::Window => ValueKey::Window,
            Value::Document => ValueKey::Document,
            other => match other.identity() {
                Some(identity) => ValueKey::Reference(identity),
                None => ValueKey::Undefined,
            },
        }
    }
}

// Collections store `-0` as `+0`.
fn normalize_zero(value: Value) -> Value {
    match value {
        Value::Number(Number::Float(f)) if f == 0.0 => Value::Number(Number::Integer(0)),
        other => other,
    }
}

/// An insertion-ordered set of values.
#[derive(Clone, Default)]
pub struct ValueSet {
    entries: IndexMap<ValueKey, Value>,
}

impl ValueSet {
    #[must_use]
    pub fn new() -> Self {
        ValueSet::default()
    }

    /// Adds a value. Returns `true` if no equal value was present.
    pub fn insert(&mut self, value: Value) -> bool {
        let value = normalize_zero(value);
        self.entries.insert(ValueKey::of(&value), value).is_none()
    }

    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.entries.contains_key(&ValueKey::of(value))
    }

    pub fn remove(&mut self, value: &Value) -> bool {
        self.entries.shift_remove(&ValueKey::of(value)).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut set = ValueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// An insertion-ordered map from values to values.
#[derive(Clone, Default)]
pub struct ValueMap {
    entries: IndexMap<ValueKey, (Value, Value)>,
}

impl ValueMap {
    #[must_use]
    pub fn new() -> Self {
        ValueMap::default()
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        let key = normalize_zero(key);
        self.entries
            .insert(ValueKey::of(&key), (key, value))
            .map(|(_, previous)| previous)
    }

    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.get(&ValueKey::of(key)).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.entries.contains_key(&ValueKey::of(key))
    }

    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        self.entries
            .shift_remove(&ValueKey::of(key))
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.values().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.values().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values().map(|(_, v)| v)
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;

    #[test]
    fn test_set_dedups_primitives_by_value() {
        let set: ValueSet = [
            Value::from(3),
            Value::from(3.0),
            Value::from("3"),
            Value::from(f64::NAN),
            Value::from(f64::NAN),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_set_dedups_objects_by_identity() {
        let a = Value::object();
        let set: ValueSet = [a.clone(), Value::object(), a.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
    }

    #[test]
    fn test_zero_signs_collapse() {
        let mut set = ValueSet::new();
        assert!(set.insert(Value::from(-0.0)));
        assert!(!set.insert(Value::from(0)));
        assert_eq!(set.iter().next().and_then(|v| v.as_i64()), Some(0));
    }

    #[test]
    fn test_symbols_as_keys() {
        let mut map = ValueMap::new();
        map.insert(Value::symbol_for("k"), Value::from(1));
        map.insert(Value::symbol_for("k"), Value::from(2));
        map.insert(Value::from(Symbol::new("k")), Value::from(3));
        map.insert(Value::from(Symbol::new("k")), Value::from(4));
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&Value::symbol_for("k")).and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_map_keeps_first_position() {
        let map: ValueMap = [
            (Value::from("a"), Value::from(1)),
            (Value::from("b"), Value::from(2)),
            (Value::from("a"), Value::from(3)),
        ]
        .into_iter()
        .collect();
        let pairs: Vec<_> = map
            .iter()
            .map(|(k, v)| (k.as_str().unwrap_or_default().to_string(), v.as_i64()))
            .collect();
        assert_eq!(
            pairs,
            vec![("a".to_string(), Some(3)), ("b".to_string(), Some(2))]
        );
    }
}
