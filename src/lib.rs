//! # serialize_as_code
//!
//! Renders dynamic values as near-source text: the string you would have typed
//! to construct the value, compact enough to drop into a test snapshot or a log
//! line.
//!
//! ## Key Features
//!
//! - **Literal output**: strings in single quotes, `new Date(ms)`, `new Set([...])`,
//!   `Clazz{a: 1}` for class instances, `Symbol.for('key')` for registry symbols
//! - **Deterministic**: object keys are sorted, so property insertion order never
//!   changes the output
//! - **Cycle safe**: a reference back to an ancestor renders as `>CYCLOMATIC<`,
//!   while repeated non-ancestral references render in full
//! - **UI element trees**: element nodes render as JSX-like tags
//! - **Pluggable**: a custom encoder can override any value at any depth
//! - **Serde bridge**: any `T: Serialize` can be rendered
//!
//! ## Quick Start
//!
//! ```rust
//! use serialize_as_code::{run, value, Value};
//!
//! assert_eq!(run(&value!({ prop1: 12, prop2: "test" })), "{prop1: 12, prop2: 'test'}");
//! assert_eq!(run(&Value::date_millis(1234)), "new Date(1234)");
//! assert_eq!(run(&Value::instance("Clazz")), "Clazz{}");
//! ```
//!
//! ### Cycles
//!
//! ```rust
//! use serialize_as_code::{run, Value};
//!
//! let object = Value::object();
//! object.set_property("rec", object.clone());
//! assert_eq!(run(&object), "{rec: >CYCLOMATIC<}");
//! ```
//!
//! ### Custom encoders
//!
//! ```rust
//! use serialize_as_code::{create, value, Value};
//!
//! let serialize = create(|value: &Value| {
//!     value.get_property("hidden").map(|_| "<hidden>".to_string())
//! });
//! let data = value!({ a: 1, secret: { hidden: true } });
//! assert_eq!(serialize(&data), "{a: 1, secret: <hidden>}");
//! ```
//!
//! ### UI elements
//!
//! ```rust
//! use serialize_as_code::{run, Element};
//!
//! let tree = Element::new("div")
//!     .prop("className", "box")
//!     .child(Element::new("span").child("hi"))
//!     .into_value();
//! assert_eq!(run(&tree), "<div className=\"box\"><span>hi</span></div>");
//! ```
//!
//! ### Rust data
//!
//! ```rust
//! use serde::Serialize;
//! use serialize_as_code::to_code;
//!
//! #[derive(Serialize)]
//! struct User { id: u32, tags: Vec<&'static str> }
//!
//! let user = User { id: 7, tags: vec!["admin"] };
//! assert_eq!(to_code(&user).unwrap(), "User{id: 7, tags: ['admin']}");
//! ```
//!
//! ## Logging
//!
//! Decisions that change the output without an obvious cause in the input
//! (custom overrides, cycle markers, element fallbacks) are reported through the
//! [`log`] facade at `debug` and `trace` level. No logger is installed by this
//! crate.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Primitives, objects, class instances and cycles
//! - **`custom_encoder.rs`** - Overriding the built-in encoders
//! - **`elements.rs`** - Rendering UI element trees
//! - **`serde_values.rs`** - Rendering `Serialize` types
//!
//! Run any example with: `cargo run --example <name>`

pub mod collections;
pub mod element;
pub mod encode;
pub mod error;
#[macro_use]
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod tag;
pub mod value;

pub use collections::{ValueMap, ValueSet};
pub use element::Element;
pub use encode::{CustomEncoder, Encoder, RecursionPath, CYCLE_MARKER};
pub use error::{Error, Result};
pub use map::PropertyMap;
pub use options::{CodeOptions, ElementMarkers};
pub use ser::{to_value, ValueSerializer};
pub use tag::{type_tag, TypeTag};
pub use value::{Date, ErrorObject, Function, FunctionKind, Identity, Number, Object, RegExp, Symbol, Value};

use serde::Serialize;

/// Encodes a value with the built-in encoders and default options.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{run, Value};
///
/// assert_eq!(run(&Value::from("test")), "'test'");
/// assert_eq!(run(&Value::array(vec![Value::from(1), Value::Null])), "[1, null]");
/// ```
#[must_use]
pub fn run(value: &Value) -> String {
    to_string_with_options(value, &CodeOptions::default())
}

/// Builds an encoding function that consults `custom` before the built-in
/// encoders, for the root and every nested value.
///
/// Returning `None` from `custom` hands the value to the built-in chain.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{create, Value};
///
/// let serialize = create(|value: &Value| value.as_i64().map(|n| format!("#{n}")));
/// assert_eq!(serialize(&Value::array(vec![Value::from(1), Value::from("a")])), "[#1, 'a']");
/// ```
pub fn create<F>(custom: F) -> impl Fn(&Value) -> String
where
    F: Fn(&Value) -> Option<String>,
{
    let options = CodeOptions::default();
    move |value: &Value| {
        Encoder::new(&options)
            .with_custom(&custom)
            .encode_root(value)
    }
}

/// Encodes a value with the built-in encoders and the given options.
#[must_use]
pub fn to_string_with_options(value: &Value, options: &CodeOptions) -> String {
    Encoder::new(options).encode_root(value)
}

/// A reusable encoding configuration.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{CodeOptions, Serializer, Value};
///
/// let serializer = Serializer::new()
///     .with_options(CodeOptions::new().with_host_elements(false))
///     .with_custom(|value: &Value| value.is_null().then(|| "nil".to_string()));
///
/// assert_eq!(serializer.run(&Value::Null), "nil");
/// assert_eq!(serializer.run(&Value::instance("HTMLSpanElement")), "HTMLSpanElement{}");
/// ```
#[derive(Default)]
pub struct Serializer {
    options: CodeOptions,
    custom: Option<Box<dyn Fn(&Value) -> Option<String>>>,
}

impl Serializer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(mut self, options: CodeOptions) -> Self {
        self.options = options;
        self
    }

    /// Installs a custom encoder, replacing any previous one.
    #[must_use]
    pub fn with_custom<F>(mut self, custom: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + 'static,
    {
        self.custom = Some(Box::new(custom));
        self
    }

    #[must_use]
    pub fn options(&self) -> &CodeOptions {
        &self.options
    }

    /// Encodes a value.
    #[must_use]
    pub fn run(&self, value: &Value) -> String {
        let mut encoder = Encoder::new(&self.options);
        if let Some(custom) = self.custom.as_deref() {
            encoder = encoder.with_custom(custom);
        }
        encoder.encode_root(value)
    }

    /// Converts `value` through the serde bridge and encodes the result.
    ///
    /// # Errors
    ///
    /// Returns an error if `value`'s `Serialize` implementation fails.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn serialize<T>(&self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Ok(self.run(&to_value(value)?))
    }
}

/// Serializes any `T: Serialize` to near-source text.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::to_code;
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("bob", 3);
/// scores.insert("alice", 5);
/// assert_eq!(to_code(&scores).unwrap(), "{alice: 5, bob: 3}");
/// ```
///
/// # Errors
///
/// Returns an error if `value`'s `Serialize` implementation fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_code<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Serializer::new().serialize(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_run_uses_default_options() {
        let div = Value::instance("HTMLDivElement");
        assert_eq!(run(&div), "HTMLDivElement");
        assert_eq!(
            to_string_with_options(&div, &CodeOptions::new().with_host_elements(false)),
            "HTMLDivElement{}"
        );
    }

    #[test]
    fn test_create_reaches_nested_values() {
        let serialize = create(|value: &Value| value.is_string().then(|| "S".to_string()));
        let nested = value!({ a: ["x", { b: "y" }], c: 1 });
        assert_eq!(serialize(&nested), "{a: [S, {b: S}], c: 1}");
    }

    #[test]
    fn test_create_can_override_root() {
        let serialize = create(|_: &Value| Some("root".to_string()));
        assert_eq!(serialize(&value!({ a: 1 })), "root");
    }

    #[test]
    fn test_created_function_is_reusable() {
        let calls = Cell::new(0);
        let serialize = create(|_: &Value| {
            calls.set(calls.get() + 1);
            None
        });
        let object = Value::object();
        object.set_property("self", object.clone());

        assert_eq!(serialize(&object), "{self: >CYCLOMATIC<}");
        assert_eq!(serialize(&object), "{self: >CYCLOMATIC<}");
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_serializer_without_custom_matches_run() {
        let value = value!({ z: [1, 2], a: null });
        assert_eq!(Serializer::new().run(&value), run(&value));
    }

    #[test]
    fn test_serializer_serialize() {
        let serializer = Serializer::new().with_custom(|value: &Value| {
            value.as_i64().filter(|n| *n > 100).map(|_| "big".to_string())
        });
        assert_eq!(serializer.serialize(&vec![1, 500]).unwrap(), "[1, big]");
        assert!(serializer.options().host_elements);
    }

    #[test]
    fn test_to_code() {
        assert_eq!(to_code(&(1, "a", None::<u8>)).unwrap(), "[1, 'a', null]");
    }
}
