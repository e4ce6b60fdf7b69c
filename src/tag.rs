//! Type classification.
//!
//! [`type_tag`] maps every [`Value`] to the class word a host would report for
//! it (`"String"`, `"Date"`, `"AsyncFunction"`, ...). The classifier is total:
//! anything without a dedicated tag is an `Object`, and callers decide how to
//! render it.

use crate::value::FunctionKind;
use crate::Value;
use std::fmt;

/// Name of the property that marks an object as a UI element node.
pub const MARKER_PROPERTY: &str = "$$typeof";

/// Canonical classification label of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    RegExp,
    Function,
    AsyncFunction,
    Date,
    Set,
    Map,
    Error,
    Window,
    Document,
    Array,
    /// An object carrying a symbol under [`MARKER_PROPERTY`].
    Element,
    Object,
}

impl TypeTag {
    /// Returns the class word of this tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialize_as_code::TypeTag;
    ///
    /// assert_eq!(TypeTag::AsyncFunction.as_str(), "AsyncFunction");
    /// assert_eq!(TypeTag::Boolean.as_str(), "Boolean");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "Undefined",
            TypeTag::Null => "Null",
            TypeTag::Boolean => "Boolean",
            TypeTag::Number => "Number",
            TypeTag::BigInt => "BigInt",
            TypeTag::String => "String",
            TypeTag::Symbol => "Symbol",
            TypeTag::RegExp => "RegExp",
            TypeTag::Function => "Function",
            TypeTag::AsyncFunction => "AsyncFunction",
            TypeTag::Date => "Date",
            TypeTag::Set => "Set",
            TypeTag::Map => "Map",
            TypeTag::Error => "Error",
            TypeTag::Window => "Window",
            TypeTag::Document => "Document",
            TypeTag::Array => "Array",
            TypeTag::Element => "Element",
            TypeTag::Object => "Object",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a value.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{type_tag, TypeTag, Value};
///
/// assert_eq!(type_tag(&Value::from("x")), TypeTag::String);
/// assert_eq!(type_tag(&Value::async_function("load")), TypeTag::AsyncFunction);
/// assert_eq!(type_tag(&Value::instance("Clazz")), TypeTag::Object);
/// ```
#[must_use]
pub fn type_tag(value: &Value) -> TypeTag {
    match value {
        Value::Undefined => TypeTag::Undefined,
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::BigInt(_) => TypeTag::BigInt,
        Value::String(_) => TypeTag::String,
        Value::Symbol(_) => TypeTag::Symbol,
        Value::RegExp(_) => TypeTag::RegExp,
        Value::Function(f) => match f.kind() {
            FunctionKind::Sync => TypeTag::Function,
            FunctionKind::Async => TypeTag::AsyncFunction,
        },
        Value::Date(_) => TypeTag::Date,
        Value::Set(_) => TypeTag::Set,
        Value::Map(_) => TypeTag::Map,
        Value::Error(_) => TypeTag::Error,
        Value::Window => TypeTag::Window,
        Value::Document => TypeTag::Document,
        Value::Array(_) => TypeTag::Array,
        Value::Object(object) => {
            let marked = matches!(object.borrow().get(MARKER_PROPERTY), Some(Value::Symbol(_)));
            if marked {
                TypeTag::Element
            } else {
                TypeTag::Object
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Symbol;
    use num_bigint::BigInt;

    #[test]
    fn test_primitive_tags() {
        assert_eq!(type_tag(&Value::Undefined), TypeTag::Undefined);
        assert_eq!(type_tag(&Value::Null), TypeTag::Null);
        assert_eq!(type_tag(&Value::from(true)), TypeTag::Boolean);
        assert_eq!(type_tag(&Value::from(1.5)), TypeTag::Number);
        assert_eq!(type_tag(&Value::BigInt(BigInt::from(13))), TypeTag::BigInt);
        assert_eq!(type_tag(&Value::from(Symbol::new("s"))), TypeTag::Symbol);
    }

    #[test]
    fn test_object_kind_tags() {
        assert_eq!(type_tag(&Value::regexp("a", "g")), TypeTag::RegExp);
        assert_eq!(type_tag(&Value::function("f")), TypeTag::Function);
        assert_eq!(type_tag(&Value::date_millis(0)), TypeTag::Date);
        assert_eq!(type_tag(&Value::set_of([])), TypeTag::Set);
        assert_eq!(type_tag(&Value::map_of([])), TypeTag::Map);
        assert_eq!(type_tag(&Value::error("e")), TypeTag::Error);
        assert_eq!(type_tag(&Value::Window), TypeTag::Window);
        assert_eq!(type_tag(&Value::Document), TypeTag::Document);
        assert_eq!(type_tag(&Value::array(vec![])), TypeTag::Array);
    }

    #[test]
    fn test_marker_property_needs_a_symbol() {
        let marked = Value::object();
        marked.set_property(MARKER_PROPERTY, Value::symbol_for("foo"));
        assert_eq!(type_tag(&marked), TypeTag::Element);

        let not_marked = Value::object();
        not_marked.set_property(MARKER_PROPERTY, Value::from("react.element"));
        assert_eq!(type_tag(&not_marked), TypeTag::Object);
    }

    #[test]
    fn test_display_uses_class_word() {
        assert_eq!(TypeTag::Element.to_string(), "Element");
        assert_eq!(format!("{}", TypeTag::Window), "Window");
    }
}
