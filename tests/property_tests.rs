//! Property-based tests for the encoder laws that hold for every input:
//! totality, determinism, key-order independence and the quoting rule.

use proptest::prelude::*;
use serialize_as_code::{run, to_code, Object, Value, CYCLE_MARKER};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Undefined),
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[a-z' \"]{0,8}".prop_map(Value::from),
        "[a-z]{1,6}".prop_map(|key| Value::symbol_for(key)),
        any::<i64>().prop_map(|ms| Value::date_millis(ms % 8_640_000_000_000_000)),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::array),
            prop::collection::vec(("[a-z]{1,4}", inner.clone()), 0..4).prop_map(|fields| {
                let object = Value::object();
                for (key, value) in fields {
                    object.set_property(key, value);
                }
                object
            }),
            prop::collection::vec(inner, 0..4).prop_map(Value::set_of),
        ]
    })
}

proptest! {
    #[test]
    fn prop_encoding_is_deterministic(value in tree()) {
        prop_assert_eq!(run(&value), run(&value));
    }

    #[test]
    fn prop_acyclic_trees_have_no_cycle_marker(value in tree()) {
        prop_assert!(!run(&value).contains(CYCLE_MARKER));
    }

    #[test]
    fn prop_key_order_is_irrelevant(fields in prop::collection::btree_map("[a-zA-Z_]{1,6}", any::<i32>(), 0..8)) {
        let mut forward = Object::instance_of("Rec");
        for (key, value) in fields.iter() {
            forward.insert(key.clone(), Value::from(*value));
        }
        let mut backward = Object::instance_of("Rec");
        for (key, value) in fields.iter().rev() {
            backward.insert(key.clone(), Value::from(*value));
        }
        prop_assert_eq!(run(&Value::from(forward)), run(&Value::from(backward)));
    }

    #[test]
    fn prop_quoting_rule(text in "[a-z' \"]{0,12}") {
        let encoded = run(&Value::from(text.as_str()));
        let expected = if text.contains('\'') && !text.contains('"') {
            format!("\"{}\"", text)
        } else {
            format!("'{}'", text)
        };
        prop_assert_eq!(encoded, expected);
    }

    #[test]
    fn prop_self_reference_is_marked(key in "[a-z]{1,6}", n in any::<i32>()) {
        let object = Value::object();
        object.set_property("n", Value::from(n));
        object.set_property(key.clone(), object.clone());
        let encoded = run(&object);
        let needle = format!("{}: {}", key, CYCLE_MARKER);
        prop_assert!(encoded.contains(&needle), "{} lacks {}", encoded, needle);
    }

    #[test]
    fn prop_integers_match_display(n in any::<i64>()) {
        prop_assert_eq!(to_code(&n).unwrap(), n.to_string());
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        let expected = format!(
            "[{}]",
            v.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(to_code(&v).unwrap(), expected);
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        let expected = opt.map_or_else(|| "null".to_string(), |n| n.to_string());
        prop_assert_eq!(to_code(&opt).unwrap(), expected);
    }
}
