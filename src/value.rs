//! Dynamic host value model.
//!
//! [`Value`] is the input of the encoder: a dynamically-typed graph that mirrors
//! the values of a scripting host. Primitives (`undefined`, `null`, booleans,
//! numbers, big integers, strings, symbols) have value semantics. Everything
//! else is an object and is held through a reference-counted handle, so cloning
//! a `Value` copies the *reference* and two handles to the same object compare
//! equal while two structurally equal objects do not.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serialize_as_code::{Value, value};
//!
//! let text = Value::from("hello");
//! let date = Value::date_millis(1531052672662);
//! let array = Value::array(vec![Value::from(1), Value::from("two")]);
//!
//! let obj = value!({ prop1: 12, prop2: "test" });
//! assert_eq!(obj.to_string(), "{prop1: 12, prop2: 'test'}");
//! ```
//!
//! ### Building Cycles
//!
//! Mutable composites (objects, arrays, sets, maps) use interior mutability, so
//! a value can be made to reference itself:
//!
//! ```rust
//! use serialize_as_code::Value;
//!
//! let o = Value::object();
//! o.set_property("me", o.clone());
//! assert_eq!(o.to_string(), "{me: >CYCLOMATIC<}");
//! ```
//!
//! Reference cycles are never reclaimed by `Rc`. Break them with
//! [`Value::remove_property`] when a cyclic graph must be freed.

use crate::collections::{ValueMap, ValueSet};
use crate::PropertyMap;
use chrono::{DateTime, TimeZone, Utc};
use num_bigint::BigInt;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed host value.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{Value, TypeTag};
///
/// assert_eq!(Value::Undefined.type_tag(), TypeTag::Undefined);
/// assert_eq!(Value::from(42).type_tag(), TypeTag::Number);
/// assert_eq!(Value::object().type_tag(), TypeTag::Object);
/// ```
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(Number),
    BigInt(BigInt),
    String(String),
    Symbol(Symbol),
    RegExp(Rc<RegExp>),
    Date(Rc<Date>),
    Function(Rc<Function>),
    Error(Rc<ErrorObject>),
    Set(Rc<RefCell<ValueSet>>),
    Map(Rc<RefCell<ValueMap>>),
    Array(Rc<RefCell<Vec<Value>>>),
    Object(Rc<RefCell<Object>>),
    /// The global window singleton of a browser host.
    Window,
    /// The global document singleton of a browser host.
    Document,
}

/// The address of an object-kind value.
///
/// Two identities are equal exactly when they refer to the same object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(usize);

impl Identity {
    fn of<T: ?Sized>(handle: &Rc<T>) -> Self {
        Identity(Rc::as_ptr(handle).cast::<()>() as usize)
    }
}

/// A numeric value that can be an integer, float, or special float value.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(3.5).to_string(), "3.5");
/// assert_eq!(Number::Float(1e21).to_string(), "1e+21");
/// assert_eq!(Number::NaN.to_string(), "NaN");
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it is a whole number in range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialize_as_code::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// assert_eq!(Number::Infinity.as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }

    /// Returns `true` for zero (of either sign) and NaN.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(f) => *f == 0.0 || f.is_nan(),
            Number::NaN => true,
            Number::Infinity | Number::NegativeInfinity => false,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write_float(f, *fl),
            Number::Infinity => f.write_str("Infinity"),
            Number::NegativeInfinity => f.write_str("-Infinity"),
            Number::NaN => f.write_str("NaN"),
        }
    }
}

// Host number-to-string: plain decimal inside [1e-6, 1e21), exponent form outside.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&value.abs()) {
        return write!(f, "{}", value);
    }
    let exponential = format!("{:e}", value);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&exponential),
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

/// A symbol: either registered under a global registry key or unique.
///
/// Registered symbols with the same key are the same symbol. Unique symbols are
/// only equal to themselves (and their clones).
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::Symbol;
///
/// assert_eq!(Symbol::for_key("app"), Symbol::for_key("app"));
/// assert_ne!(Symbol::new("app"), Symbol::new("app"));
/// assert_eq!(Symbol::for_key("app").key_for(), Some("app"));
/// assert_eq!(Symbol::new("app").key_for(), None);
/// ```
#[derive(Clone)]
pub struct Symbol(Rc<SymbolData>);

struct SymbolData {
    description: Option<String>,
    registered: bool,
}

impl Symbol {
    /// Creates a unique symbol with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Symbol(Rc::new(SymbolData {
            description: Some(description.into()),
            registered: false,
        }))
    }

    /// Creates a unique symbol without a description.
    pub fn anonymous() -> Self {
        Symbol(Rc::new(SymbolData {
            description: None,
            registered: false,
        }))
    }

    /// Returns the registry symbol for `key`.
    pub fn for_key(key: impl Into<String>) -> Self {
        Symbol(Rc::new(SymbolData {
            description: Some(key.into()),
            registered: true,
        }))
    }

    /// Returns the registry key if this symbol is registered.
    #[must_use]
    pub fn key_for(&self) -> Option<&str> {
        if self.0.registered {
            self.0.description.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    pub(crate) fn identity(&self) -> Identity {
        Identity::of(&self.0)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        match (self.key_for(), other.key_for()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => Rc::ptr_eq(&self.0, &other.0),
            _ => false,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A regular expression, kept as its source and flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegExp {
    source: String,
    flags: String,
}

impl RegExp {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        RegExp {
            source: source.into(),
            flags: flags.into(),
        }
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn flags(&self) -> &str {
        &self.flags
    }
}

/// Formats the literal form `/source/flags`.
impl fmt::Display for RegExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.source.is_empty() {
            "(?:)"
        } else {
            &self.source
        };
        write!(f, "/{}/{}", source, self.flags)
    }
}

/// Largest distance from the epoch, in milliseconds, that a host date can hold.
pub const MAX_TIME_MILLIS: i64 = 8_640_000_000_000_000;

/// A point in time with millisecond precision, or an invalid date.
///
/// The valid range is `±MAX_TIME_MILLIS` around the epoch, which is wider than
/// what `chrono` can represent; [`Date::time`] returns `None` near the edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Date {
    millis: Option<i64>,
}

impl Date {
    pub fn new(time: DateTime<Utc>) -> Self {
        Date::from_millis(time.timestamp_millis())
    }

    /// Creates a date from milliseconds since the Unix epoch.
    ///
    /// Timestamps beyond `±MAX_TIME_MILLIS` produce an invalid date.
    pub fn from_millis(millis: i64) -> Self {
        Date {
            millis: (-MAX_TIME_MILLIS..=MAX_TIME_MILLIS)
                .contains(&millis)
                .then_some(millis),
        }
    }

    pub fn invalid() -> Self {
        Date { millis: None }
    }

    /// The calendar time, if valid and within `chrono`'s range.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.millis?).single()
    }

    /// Milliseconds since the Unix epoch, or `None` for an invalid date.
    #[must_use]
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.millis
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Sync,
    Async,
}

/// A callable, described by its name and kind. An empty name is anonymous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    name: String,
    kind: FunctionKind,
}

impl Function {
    pub fn new(name: impl Into<String>, kind: FunctionKind) -> Self {
        Function {
            name: name.into(),
            kind,
        }
    }

    pub fn sync(name: impl Into<String>) -> Self {
        Function::new(name, FunctionKind::Sync)
    }

    pub fn asynchronous(name: impl Into<String>) -> Self {
        Function::new(name, FunctionKind::Async)
    }

    /// Returns the name, or `None` for an anonymous function.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FunctionKind {
        self.kind
    }
}

/// An error instance: constructor name plus message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorObject {
    name: String,
    message: String,
}

impl ErrorObject {
    /// Creates a plain `Error`.
    pub fn new(message: impl Into<String>) -> Self {
        ErrorObject::with_name("Error", message)
    }

    /// Creates an error of a named subclass such as `TypeError`.
    pub fn with_name(name: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorObject {
            name: name.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The constructor name of plain objects.
pub const BASE_CONSTRUCTOR: &str = "Object";

/// An ordinary object: constructor name plus own enumerable properties.
#[derive(Clone, Default)]
pub struct Object {
    constructor: Option<String>,
    properties: PropertyMap,
}

impl Object {
    /// Creates an empty plain object.
    pub fn new() -> Self {
        Object::instance_of(BASE_CONSTRUCTOR)
    }

    /// Creates an empty instance of the named class.
    pub fn instance_of(constructor: impl Into<String>) -> Self {
        Object {
            constructor: Some(constructor.into()),
            properties: PropertyMap::new(),
        }
    }

    /// Creates an object without a prototype, hence without a constructor.
    pub fn without_prototype() -> Self {
        Object::default()
    }

    #[must_use]
    pub fn constructor_name(&self) -> Option<&str> {
        self.constructor.as_deref()
    }

    #[must_use]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.properties.insert(key, value)
    }

    /// Builder-style [`Object::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key, value.into());
        self
    }
}

impl Value {
    /// Creates an empty plain object.
    #[must_use]
    pub fn object() -> Self {
        Value::from(Object::new())
    }

    /// Creates an empty instance of the named class.
    #[must_use]
    pub fn instance(constructor: impl Into<String>) -> Self {
        Value::from(Object::instance_of(constructor))
    }

    #[must_use]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(elements)))
    }

    /// Creates a set, deduplicating the entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serialize_as_code::Value;
    ///
    /// let set = Value::set_of([Value::from(3), Value::from(3)]);
    /// assert_eq!(set.to_string(), "new Set([3])");
    /// ```
    pub fn set_of<I: IntoIterator<Item = Value>>(entries: I) -> Self {
        Value::Set(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    /// Creates a map from key-value pairs; later pairs win for duplicate keys.
    pub fn map_of<I: IntoIterator<Item = (Value, Value)>>(entries: I) -> Self {
        Value::Map(Rc::new(RefCell::new(entries.into_iter().collect())))
    }

    #[must_use]
    pub fn date_millis(millis: i64) -> Self {
        Value::Date(Rc::new(Date::from_millis(millis)))
    }

    #[must_use]
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Value::RegExp(Rc::new(RegExp::new(source, flags)))
    }

    /// Creates a synchronous function; an empty name makes it anonymous.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Value::from(Function::sync(name))
    }

    /// Creates an async function; an empty name makes it anonymous.
    #[must_use]
    pub fn async_function(name: impl Into<String>) -> Self {
        Value::from(Function::asynchronous(name))
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Value::from(ErrorObject::new(message))
    }

    #[must_use]
    pub fn symbol_for(key: impl Into<String>) -> Self {
        Value::Symbol(Symbol::for_key(key))
    }

    /// Returns the referent address of object-kind values, `None` for primitives.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Value::RegExp(r) => Some(Identity::of(r)),
            Value::Date(d) => Some(Identity::of(d)),
            Value::Function(f) => Some(Identity::of(f)),
            Value::Error(e) => Some(Identity::of(e)),
            Value::Set(s) => Some(Identity::of(s)),
            Value::Map(m) => Some(Identity::of(m)),
            Value::Array(a) => Some(Identity::of(a)),
            Value::Object(o) => Some(Identity::of(o)),
            _ => None,
        }
    }

    /// Returns the canonical type tag of this value.
    #[must_use]
    pub fn type_tag(&self) -> crate::TypeTag {
        crate::tag::type_tag(self)
    }

    /// Host truthiness: `undefined`, `null`, `false`, zero, NaN, `0n` and the
    /// empty string are falsy, everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !n.is_falsy(),
            Value::BigInt(b) => b.sign() != num_bigint::Sign::NoSign,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Rc<RefCell<Object>>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&Rc<RefCell<Vec<Value>>>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Reads a property of an object. Returns `None` for non-objects.
    #[must_use]
    pub fn get_property(&self, key: &str) -> Option<Value> {
        self.as_object()
            .and_then(|object| object.borrow().get(key).cloned())
    }

    /// Writes a property of an object and returns the previous value.
    ///
    /// Writing to a non-object has no effect and returns `None`.
    pub fn set_property(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.as_object()
            .and_then(|object| object.borrow_mut().insert(key, value))
    }

    /// Removes a property of an object.
    pub fn remove_property(&self, key: &str) -> Option<Value> {
        self.as_object()
            .and_then(|object| object.borrow_mut().properties_mut().remove(key))
    }

    /// Appends to an array. Returns `false` if this is not an array.
    pub fn push(&self, element: Value) -> bool {
        match self {
            Value::Array(elements) => {
                elements.borrow_mut().push(element);
                true
            }
            _ => false,
        }
    }
}

/// Strict equality: primitives by value, objects by identity.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::Value;
///
/// let a = Value::object();
/// assert_eq!(a, a.clone());
/// assert_ne!(a, Value::object());
/// assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
/// ```
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined)
            | (Value::Null, Value::Null)
            | (Value::Window, Value::Window)
            | (Value::Document, Value::Document) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            _ => match (self.identity(), other.identity()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

/// Renders the value with the built-in encoders.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::run(self))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::run(self))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<RegExp> for Value {
    fn from(value: RegExp) -> Self {
        Value::RegExp(Rc::new(value))
    }
}

impl From<Date> for Value {
    fn from(value: Date) -> Self {
        Value::Date(Rc::new(value))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(Rc::new(Date::new(value)))
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(Rc::new(value))
    }
}

impl From<ErrorObject> for Value {
    fn from(value: ErrorObject) -> Self {
        Value::Error(Rc::new(value))
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(Rc::new(RefCell::new(value)))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
