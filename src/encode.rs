//! The encoder chain.
//!
//! [`Encoder::encode`] tries a fixed sequence of encoders and returns the output
//! of the first one that does not decline:
//!
//! 1. the custom encoder, if configured
//! 2. `undefined` / `null`
//! 3. flat types (strings, numbers, dates, sets, maps, ...)
//! 4. the cycle detector
//! 5. UI element nodes
//! 6. arrays
//! 7. opaque host elements (`HTMLDivElement`, ...)
//! 8. generic objects, which never decline
//!
//! Encoders 5 to 8 see the value pushed onto the [`RecursionPath`] before they
//! look at its children. The path is identity based and lives on the call
//! stack, so independent calls never share state.
//!
//! ```rust
//! use serialize_as_code::{CodeOptions, Encoder, Value};
//!
//! let options = CodeOptions::new();
//! let encoder = Encoder::new(&options);
//! assert_eq!(encoder.encode_root(&Value::from("test")), "'test'");
//! ```

use crate::value::{Identity, BASE_CONSTRUCTOR};
use crate::{element, CodeOptions, TypeTag, Value};

/// Placeholder for a reference back to an ancestor.
pub const CYCLE_MARKER: &str = ">CYCLOMATIC<";

/// Caller-supplied override, consulted before all built-in encoders.
pub type CustomEncoder<'a> = dyn Fn(&Value) -> Option<String> + 'a;

/// The composite values entered between the root and the current position.
///
/// Each level is a frame on the encoder's own call stack, so extending the path
/// for a subtree never changes the path seen by siblings.
#[derive(Clone, Copy, Default)]
pub struct RecursionPath<'a> {
    head: Option<&'a Frame<'a>>,
}

struct Frame<'a> {
    identity: Identity,
    parent: RecursionPath<'a>,
}

impl<'a> RecursionPath<'a> {
    /// The empty path of a top-level call.
    #[must_use]
    pub const fn root() -> Self {
        RecursionPath { head: None }
    }

    #[must_use]
    pub fn contains(&self, identity: Identity) -> bool {
        self.frames().any(|frame| frame.identity == identity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Runs `visit` with this path extended by `identity`.
    pub fn descend<R>(&self, identity: Identity, visit: impl FnOnce(RecursionPath<'_>) -> R) -> R {
        let frame = Frame {
            identity,
            parent: *self,
        };
        visit(RecursionPath { head: Some(&frame) })
    }

    fn frames(&self) -> impl Iterator<Item = &'a Frame<'a>> {
        std::iter::successors(self.head, |frame| frame.parent.head)
    }
}

/// A configured encoder chain.
///
/// Holds only borrowed configuration; all per-call state is the
/// [`RecursionPath`] passed down the recursion.
#[derive(Clone, Copy)]
pub struct Encoder<'a> {
    options: &'a CodeOptions,
    custom: Option<&'a CustomEncoder<'a>>,
}

impl<'a> Encoder<'a> {
    pub fn new(options: &'a CodeOptions) -> Self {
        Encoder {
            options,
            custom: None,
        }
    }

    #[must_use]
    pub fn with_custom(mut self, custom: &'a CustomEncoder<'a>) -> Self {
        self.custom = Some(custom);
        self
    }

    #[must_use]
    pub fn options(&self) -> &'a CodeOptions {
        self.options
    }

    /// Encodes `value` as the root of a new call.
    #[must_use]
    pub fn encode_root(&self, value: &Value) -> String {
        self.encode(value, RecursionPath::root())
    }

    /// Encodes `value` at the position described by `path`.
    #[must_use]
    pub fn encode(&self, value: &Value, path: RecursionPath<'_>) -> String {
        self.encode_custom(value)
            .or_else(|| encode_nullish(value))
            .or_else(|| self.encode_flat(value, path))
            .or_else(|| encode_cycle(value, path))
            .unwrap_or_else(|| match value.identity() {
                Some(identity) => {
                    path.descend(identity, |inner| self.encode_composite(value, inner))
                }
                None => self.encode_composite(value, path),
            })
    }

    fn encode_custom(&self, value: &Value) -> Option<String> {
        let encoded = (self.custom?)(value).filter(|s| !s.is_empty())?;
        log::trace!("custom encoder claimed {} value", value.type_tag());
        Some(encoded)
    }

    // Dispatches on the classifier's tag; the payload comes from the variant.
    fn encode_flat(&self, value: &Value, path: RecursionPath<'_>) -> Option<String> {
        let tag = value.type_tag();
        match (tag, value) {
            (TypeTag::String, Value::String(s)) => Some(quote(s)),
            (TypeTag::Boolean, Value::Bool(b)) => Some(b.to_string()),
            (TypeTag::Number, Value::Number(n)) => Some(n.to_string()),
            (TypeTag::BigInt, Value::BigInt(b)) => Some(format!("{}n", b)),
            (TypeTag::RegExp, Value::RegExp(r)) => Some(format!("/{}/", r)),
            (TypeTag::Function | TypeTag::AsyncFunction, Value::Function(f)) => Some(
                f.name()
                    .map_or_else(|| tag.as_str().to_string(), str::to_string),
            ),
            (TypeTag::Date, Value::Date(d)) => Some(match d.timestamp_millis() {
                Some(millis) => format!("new Date({})", millis),
                None => "new Date(NaN)".to_string(),
            }),
            (TypeTag::Symbol, Value::Symbol(s)) => Some(match s.key_for() {
                Some(key) => format!("Symbol.for('{}')", key),
                None => s.to_string(),
            }),
            (TypeTag::Error, Value::Error(e)) => Some(format!("new {}('{}')", e.name(), e.message())),
            (TypeTag::Set, Value::Set(set)) => {
                let entries: Vec<Value> = set.borrow().iter().cloned().collect();
                Some(self.encode_collection(value, path, |inner| {
                    format!("new Set({})", self.encode_sequence(&entries, inner))
                }))
            }
            (TypeTag::Map, Value::Map(map)) => {
                let entries: Vec<(Value, Value)> = map
                    .borrow()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                Some(self.encode_collection(value, path, |inner| {
                    let pairs: Vec<String> = entries
                        .iter()
                        .map(|(k, v)| format!("[{}, {}]", self.encode(k, inner), self.encode(v, inner)))
                        .collect();
                    format!("new Map([{}])", pairs.join(", "))
                }))
            }
            (TypeTag::Window, _) => Some("window".to_string()),
            (TypeTag::Document, _) => Some("document".to_string()),
            _ => None,
        }
    }

    // Sets and maps are claimed by the flat encoder before the cycle detector
    // runs, so they check the path themselves.
    fn encode_collection(
        &self,
        value: &Value,
        path: RecursionPath<'_>,
        render: impl FnOnce(RecursionPath<'_>) -> String,
    ) -> String {
        match value.identity() {
            Some(identity) if path.contains(identity) => cycle_marker(value),
            Some(identity) => path.descend(identity, render),
            None => render(path),
        }
    }

    fn encode_composite(&self, value: &Value, path: RecursionPath<'_>) -> String {
        element::encode_element(self, value, path)
            .or_else(|| self.encode_array(value, path))
            .or_else(|| self.encode_host_element(value))
            .unwrap_or_else(|| self.encode_object(value, path))
    }

    fn encode_array(&self, value: &Value, path: RecursionPath<'_>) -> Option<String> {
        let elements: Vec<Value> = value.as_array()?.borrow().clone();
        Some(self.encode_sequence(&elements, path))
    }

    /// Encodes `[e0, e1, ...]`, each element at `path`.
    pub(crate) fn encode_sequence(&self, elements: &[Value], path: RecursionPath<'_>) -> String {
        let encoded: Vec<String> = elements.iter().map(|e| self.encode(e, path)).collect();
        format!("[{}]", encoded.join(", "))
    }

    fn encode_host_element(&self, value: &Value) -> Option<String> {
        if !self.options.host_elements {
            return None;
        }
        let object = value.as_object()?.borrow();
        let name = object.constructor_name()?;
        if is_host_element_name(name) {
            Some(name.to_string())
        } else {
            None
        }
    }

    fn encode_object(&self, value: &Value, path: RecursionPath<'_>) -> String {
        let Some(object) = value.as_object() else {
            return "{}".to_string();
        };
        let (prefix, entries) = {
            let object = object.borrow();
            let prefix = match object.constructor_name() {
                Some(BASE_CONSTRUCTOR) | None => String::new(),
                Some(name) => name.to_string(),
            };
            let properties = object.properties();
            let entries: Vec<(String, Value)> = properties
                .sorted_keys()
                .into_iter()
                .filter_map(|key| properties.get(key).map(|v| (key.to_string(), v.clone())))
                .collect();
            (prefix, entries)
        };
        let fields: Vec<String> = entries
            .iter()
            .map(|(key, v)| format!("{}: {}", key, self.encode(v, path)))
            .collect();
        format!("{}{{{}}}", prefix, fields.join(", "))
    }
}

fn encode_nullish(value: &Value) -> Option<String> {
    match value {
        Value::Undefined => Some("undefined".to_string()),
        Value::Null => Some("null".to_string()),
        _ => None,
    }
}

fn encode_cycle(value: &Value, path: RecursionPath<'_>) -> Option<String> {
    let identity = value.identity()?;
    path.contains(identity).then(|| cycle_marker(value))
}

fn cycle_marker(value: &Value) -> String {
    log::debug!("cycle detected at {} value", value.type_tag());
    CYCLE_MARKER.to_string()
}

/// Wraps in double quotes when the text has a `'` but no `"`, else in single quotes.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::encode::quote;
///
/// assert_eq!(quote("test"), "'test'");
/// assert_eq!(quote("here's"), "\"here's\"");
/// assert_eq!(quote("here's \"that\""), "'here's \"that\"'");
/// ```
#[must_use]
pub fn quote(text: &str) -> String {
    if text.contains('\'') && !text.contains('"') {
        format!("\"{}\"", text)
    } else {
        format!("'{}'", text)
    }
}

/// Matches `HTML[A-Za-z]*Element`.
fn is_host_element_name(name: &str) -> bool {
    name.strip_prefix("HTML")
        .and_then(|rest| rest.strip_suffix("Element"))
        .map_or(false, |middle| middle.chars().all(|c| c.is_ascii_alphabetic()))
}
