use serialize_as_code::{run, value, Element, Number, Value};

#[test]
fn test_value_macro_keywords() {
    assert!(value!(undefined).is_undefined());
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
    assert_eq!(run(&value!(f64::INFINITY)), "Infinity");
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
    assert_eq!(run(&value!('c')), "'c'");
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(run(&value!([])), "[]");
    assert_eq!(run(&value!([1, "hello", true, null])), "[1, 'hello', true, null]");
    assert_eq!(run(&value!([[], [[]]])), "[[], [[]]]");
}

#[test]
fn test_value_macro_objects() {
    let simple = value!({ name: "Alice", "age": 30 });
    assert_eq!(simple.get_property("name"), Some(Value::from("Alice")));
    assert_eq!(simple.get_property("age"), Some(Value::from(30)));
    assert_eq!(run(&simple), "{age: 30, name: 'Alice'}");
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        user: {
            id: 123,
            name: "Bob",
            active: true
        },
        tags: ["admin", "developer"],
        count: 42,
    });

    let user = nested.get_property("user");
    assert!(user.as_ref().map_or(false, Value::is_object));
    assert_eq!(
        user.and_then(|u| u.get_property("id")),
        Some(Value::from(123))
    );
    assert_eq!(
        run(&nested),
        "{count: 42, tags: ['admin', 'developer'], user: {active: true, id: 123, name: 'Bob'}}"
    );
}

#[test]
fn test_value_macro_embeds_values() {
    let link = Element::new("a").prop("href", "/").child("home");
    let page = value!({ nav: link, when: (Value::date_millis(5)) });
    assert_eq!(run(&page), "{nav: <a href=\"/\">home</a>, when: new Date(5)}");
}

#[test]
fn test_value_macro_objects_are_fresh() {
    let a = value!({});
    let b = value!({});
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}
