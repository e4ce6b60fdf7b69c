/// Builds a [`Value`](crate::Value) from literal-like syntax.
///
/// Object keys may be identifiers or string literals. Values are nested
/// `value!` forms or single tokens; wrap anything longer, such as a negative
/// number or a method call, in parentheses.
///
/// # Examples
///
/// ```rust
/// use serialize_as_code::{run, value, Value};
///
/// let v = value!({
///     name: "Alice",
///     "data-id": 3,
///     tags: ["a", null, undefined],
///     offset: (-1),
///     created: (Value::date_millis(0))
/// });
/// assert_eq!(
///     run(&v),
///     "{created: new Date(0), data-id: 3, name: 'Alice', offset: -1, tags: ['a', null, undefined]}"
/// );
/// ```
#[macro_export]
macro_rules! value {
    (@key $key:ident) => {
        stringify!($key)
    };

    (@key $key:literal) => {
        $key
    };

    (undefined) => {
        $crate::Value::Undefined
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::array(::std::vec![$($crate::value!($elem)),+])
    };

    ({}) => {
        $crate::Value::object()
    };

    ({ $($key:tt : $value:tt),+ $(,)? }) => {{
        let object = $crate::Value::object();
        $(
            object.set_property($crate::value!(@key $key), $crate::value!($value));
        )+
        object
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{run, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert!(value!(undefined).is_undefined());
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(run(&value!([])), "[]");

        let arr = value!([1, [2, 3], "x",]);
        let elements = arr.as_array().map(|a| a.borrow().len());
        assert_eq!(elements, Some(3));
        assert_eq!(run(&arr), "[1, [2, 3], 'x']");
    }

    #[test]
    fn test_value_macro_objects() {
        assert_eq!(run(&value!({})), "{}");

        let obj = value!({
            name: "Alice",
            "$$typeof": 1,
            nested: { deep: [true] }
        });
        assert_eq!(obj.get_property("name"), Some(Value::from("Alice")));
        assert_eq!(obj.get_property("$$typeof"), Some(Value::from(1)));
        assert_eq!(run(&obj), "{$$typeof: 1, name: 'Alice', nested: {deep: [true]}}");
    }

    #[test]
    fn test_value_macro_expressions() {
        let shared = Value::object();
        let v = value!([(shared.clone()), (shared.clone())]);
        assert_eq!(run(&v), "[{}, {}]");
        assert_eq!(value!((-7)), Value::from(-7));
    }
}
