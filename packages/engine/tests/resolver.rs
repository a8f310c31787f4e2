//! Single-step resolution tests
//!
//! Map key coercion, sequence indexing and fan-out, callables and boxed
//! slots, seen through the public `Located` surface.

use std::collections::BTreeMap;

use pathor_engine::error::PathError;
use pathor_engine::located::Located;
use pathor_engine::value::{
    Callable, FloatWidth, IntWidth, Mapping, Record, Value, ValueType,
};
use serde_json::json;

#[test]
fn test_integer_keyed_map_coerces_segment() {
    let map: BTreeMap<i32, &str> = [(3, "three"), (4, "four")].into_iter().collect();
    let root = Located::new(Value::from(map));

    let three = root.find("3");
    assert_eq!(three.path(), "3");
    assert_eq!(three.raw(), Some(Value::from("three")));

    assert!(matches!(
        root.find("3.0").error(),
        Some(PathError::BadKey { key, key_type }) if key == "3.0" && key_type == "i32"
    ));
    assert!(matches!(root.find("5").error(), Some(PathError::NotFound { .. })));
}

#[test]
fn test_float_keyed_map_accepts_both_spellings() {
    let map = Mapping::new(
        ValueType::Float(FloatWidth::F32),
        ValueType::String,
        vec![(Value::from(3.0_f32), Value::from("three"))],
    );
    let root = Located::new(Value::from(map));
    assert_eq!(root.find("3").raw(), Some(Value::from("three")));
    assert_eq!(root.find("3.0").raw(), Some(Value::from("three")));
    assert!(matches!(root.find("x").error(), Some(PathError::BadKey { .. })));
}

#[test]
fn test_sequence_indexing_wraps_negatives() {
    let root = Located::new(Value::from(vec![10, 20, 30]));

    assert_eq!(root.find(1_i64).raw(), Some(Value::from(20)));
    assert_eq!(root.find(-1_i64).raw(), Some(Value::from(30)));
    assert_eq!(root.find("2").raw(), Some(Value::from(30)));

    for index in [5_i64, -4] {
        let found = root.find(index);
        assert!(matches!(
            found.error(),
            Some(PathError::IndexOutOfRange { len: 3, .. })
        ));
        assert_eq!(found.path(), format!("[{index}]"));
    }

    assert!(root.find("foo").is_invalid());
}

#[test]
fn test_fan_out_collects_survivors() {
    let root = Located::new(Value::from(json!({
        "items": [{"id": 1}, {"name": "no id"}, {"id": 3}]
    })));

    let ids = root.find("items").find("id");
    assert_eq!(ids.path(), "items[*].id");
    assert_eq!(ids.raw(), Some(Value::from(vec![1, 3])));
}

#[test]
fn test_fan_out_with_no_survivors_is_no_matches() {
    let root = Located::new(Value::from(json!({"items": [{"a": 1}, {"a": 2}]})));
    assert!(matches!(
        root.find("items").find("b").error(),
        Some(PathError::NoMatches)
    ));
}

#[test]
fn test_fan_out_unifies_element_types() {
    let records = vec![
        Value::from(Record::builder("P").field("V", 1_i32).build()),
        Value::from(Record::builder("P").field("V", Some(2_i32)).build()),
    ];
    let found = Located::new(Value::from(records)).find("V");
    assert_eq!(
        found.value_type(),
        Some(ValueType::sequence_of(ValueType::optional_of(ValueType::Int(IntWidth::I32))))
    );

    // Widths do not widen into each other
    let mixed = vec![
        Value::from(Record::builder("P").field("V", 1_i8).build()),
        Value::from(Record::builder("P").field("V", 300_i32).build()),
    ];
    let found = Located::new(Value::from(mixed)).find("V");
    assert_eq!(found.value_type(), Some(ValueType::sequence_of(ValueType::Any)));
}

#[test]
fn test_callables_are_invoked_then_navigated() {
    let make = Callable::new("make", || {
        Value::from(Record::builder("Made").field("X", 5).build())
    });
    let record = Record::builder("Factory").field("Make", make).build();
    let found = Located::new(Value::from(record)).find_path("Make.X");
    assert_eq!(found.path(), "Make.X");
    assert_eq!(found.raw(), Some(Value::from(5)));
}

#[test]
fn test_boxed_and_optional_slots_are_transparent() {
    let inner = Value::from(json!({"k": "v"}));
    let record = Record::builder("Holder")
        .field("Boxed", Value::boxed(inner.clone()))
        .field("Maybe", Value::from(Some(inner)))
        .build();
    let root = Located::new(Value::from(record));
    assert_eq!(root.find_path("Boxed.k").raw(), Some(Value::from("v")));
    assert_eq!(root.find_path("Maybe.k").raw(), Some(Value::from("v")));
}

#[test]
fn test_nested_json_chain() {
    let root = Located::new(Value::from(json!({"a": {"b": [{"c": true}]}})));
    let found = root.find("a").find("b").find(0_i64).find("c");
    assert_eq!(found.path(), "a.b[0].c");
    assert_eq!(found.raw(), Some(Value::Bool(true)));
}
