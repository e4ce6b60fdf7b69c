//! Building values from Rust data.
//!
//! [`ValueSerializer`] is a serde `Serializer` whose output is a [`Value`], so
//! any `T: Serialize` can be rendered by the encoder. Most users should call
//! [`to_value`](crate::to_value) or [`to_code`](crate::to_code):
//!
//! ```rust
//! use serde::Serialize;
//! use serialize_as_code::to_code;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! assert_eq!(to_code(&Point { x: 1, y: 2 }).unwrap(), "Point{x: 1, y: 2}");
//! ```
//!
//! ## Mapping
//!
//! | Rust / serde | Value |
//! |--------------|-------|
//! | `bool`, integers, floats | `Bool`, `Number` (`BigInt` outside the `i64` range) |
//! | `char`, `str` | `String` |
//! | `None`, `()` | `Null` |
//! | sequences, tuples, tuple structs, bytes | `Array` |
//! | maps with string keys | plain `Object` |
//! | maps with other keys | `Map` |
//! | structs | `Object` with the struct name as constructor |
//! | unit structs | empty `Object` with the struct name as constructor |
//! | unit variants | `String` with the variant name |
//! | newtype / tuple variants | `{Variant: payload}` |
//! | struct variants | `Object` with the variant name as constructor |

use crate::value::Object;
use crate::{Error, Number, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializer producing a [`Value`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    entries: Vec<(Value, Value)>,
    current_key: Option<Value>,
}

pub struct SerializeStruct {
    object: Object,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeStruct;
    type SerializeStructVariant = SerializeStruct;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(match i64::try_from(v) {
            Ok(small) => Value::from(small),
            Err(_) => Value::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(match i64::try_from(v) {
            Ok(small) => Value::from(small),
            Err(_) => Value::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(match i64::try_from(v) {
            Ok(small) => Value::from(small),
            Err(_) => Value::BigInt(BigInt::from(v)),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Ok(Value::instance(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(Value::from(Object::new().with(variant, to_value(value)?)))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<SerializeStruct> {
        Ok(SerializeStruct {
            object: Object::instance_of(name),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStruct> {
        Ok(SerializeStruct {
            object: Object::instance_of(variant),
        })
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(
            Object::new().with(self.variant, Value::array(self.vec)),
        ))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::message("map value without a key"))?;
        self.entries.push((key, to_value(value)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        if self.current_key.is_some() {
            return Err(Error::message("map key without a value"));
        }
        if self.entries.iter().all(|(key, _)| key.is_string()) {
            let mut object = Object::new();
            for (key, value) in self.entries {
                if let Value::String(key) = key {
                    object.insert(key, value);
                }
            }
            Ok(Value::from(object))
        } else {
            Ok(Value::map_of(self.entries))
        }
    }
}

impl ser::SerializeStruct for SerializeStruct {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.object.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::from(self.object))
    }
}

impl ser::SerializeStructVariant for SerializeStruct {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(self, key, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeStruct::end(self)
    }
}

/// Converts any `T: Serialize` into a [`Value`].
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Marker;

    #[derive(Serialize)]
    struct Wrapper(u8);

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Line(i32, i32),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_enum_variants() {
        assert_eq!(run(&to_value(&Shape::Empty).unwrap()), "'Empty'");
        assert_eq!(run(&to_value(&Shape::Circle(1.5)).unwrap()), "{Circle: 1.5}");
        assert_eq!(run(&to_value(&Shape::Line(1, 2)).unwrap()), "{Line: [1, 2]}");
        assert_eq!(
            run(&to_value(&Shape::Rect { w: 3, h: 4 }).unwrap()),
            "Rect{h: 4, w: 3}"
        );
    }

    #[test]
    fn test_structs() {
        assert_eq!(run(&to_value(&Marker).unwrap()), "Marker{}");
        assert_eq!(run(&to_value(&Wrapper(7)).unwrap()), "7");
    }

    #[test]
    fn test_wide_integers_become_bigints() {
        assert_eq!(run(&to_value(&u64::MAX).unwrap()), "18446744073709551615n");
        assert_eq!(run(&to_value(&(i64::MAX as i128)).unwrap()), "9223372036854775807");
        assert_eq!(run(&to_value(&i128::MIN).unwrap()), format!("{}n", i128::MIN));
    }

    #[test]
    fn test_maps_by_key_kind() {
        let mut named = BTreeMap::new();
        named.insert("b", 2);
        named.insert("a", 1);
        assert_eq!(run(&to_value(&named).unwrap()), "{a: 1, b: 2}");

        let mut numbered = BTreeMap::new();
        numbered.insert(2, "two");
        numbered.insert(1, "one");
        assert_eq!(
            run(&to_value(&numbered).unwrap()),
            "new Map([[1, 'one'], [2, 'two']])"
        );
    }

    #[test]
    fn test_map_protocol_errors() {
        use serde::ser::{SerializeMap as _, Serializer as _};

        let mut map = ValueSerializer.serialize_map(None).unwrap();
        let err = map.serialize_value(&1).unwrap_err();
        assert!(matches!(err, Error::Message(ref m) if m == "map value without a key"));

        let mut map = ValueSerializer.serialize_map(None).unwrap();
        map.serialize_key("dangling").unwrap();
        let err = map.end().unwrap_err();
        assert!(matches!(err, Error::Message(ref m) if m == "map key without a value"));
    }

    #[test]
    fn test_options_and_units() {
        assert_eq!(run(&to_value(&Option::<i32>::None).unwrap()), "null");
        assert_eq!(run(&to_value(&Some("x")).unwrap()), "'x'");
        assert_eq!(run(&to_value(&()).unwrap()), "null");
        assert_eq!(run(&to_value(&('a', true)).unwrap()), "['a', true]");
    }
}
