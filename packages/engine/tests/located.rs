//! Located value navigation tests
//!
//! Covers breadcrumbs, the invalid-propagation invariant, constants,
//! defaults, records, user navigable objects and the fast path.

use std::collections::HashMap;

use pathor_engine::error::PathError;
use pathor_engine::located::{FindOptions, Located};
use pathor_engine::value::{Callable, Navigable, NavigableError, Record, Value};
use serde_json::json;

fn nested() -> Value {
    let inner = Record::builder("Inner").field("C", 1).build();
    let middle = Record::builder("Middle").field("B", inner).build();
    Value::from(Record::builder("Outer").field("A", middle).build())
}

#[test]
fn test_record_chain_resolves_with_breadcrumb() {
    let found = Located::new(nested()).find_path("A.B.C");
    assert_eq!(found.path(), "A.B.C");
    assert_eq!(found.raw(), Some(Value::from(1)));
}

#[test]
fn test_missing_member_reports_full_path() {
    let missing = Located::new(nested()).find_path("A.B.Z");
    assert!(missing.is_invalid());
    assert_eq!(missing.path(), "A.B.Z");
    assert!(matches!(
        missing.error(),
        Some(PathError::NotFound { name, type_name }) if name == "Z" && type_name == "Inner"
    ));
}

#[test]
fn test_invalid_keeps_error_and_grows_path() {
    let missing = Located::new(nested()).find("Nope");
    let deeper = missing.find("x").find(0_i64);

    assert!(deeper.is_invalid());
    assert_eq!(deeper.error(), missing.error());
    assert_eq!(deeper.path(), "Nope.x[0]");
    assert!(deeper.path().len() > missing.path().len());

    // A default never rescues a value that was already invalid
    let still = missing.find_with("x", &FindOptions::otherwise(5));
    assert!(still.is_invalid());
    assert_eq!(still.path(), "Nope.x");
}

#[test]
fn test_default_replaces_failed_step() {
    let found = Located::new(nested()).find_with("Nope", &FindOptions::otherwise("fallback"));
    assert!(!found.is_invalid());
    assert_eq!(found.path(), "Nope");
    assert_eq!(found.raw(), Some(Value::from("fallback")));
}

#[test]
fn test_constant_navigates_to_itself() {
    let constant = Located::constant(3);
    let found = constant.find("x").find("y");
    assert!(found.is_constant());
    assert_eq!(found.path(), "x.y");
    assert_eq!(found.raw(), Some(Value::from(3)));

    let defaulted = constant.find_with("x", &FindOptions::otherwise("d"));
    assert_eq!(defaulted.raw(), Some(Value::from("d")));
}

#[test]
fn test_embedded_members_and_methods() {
    let base = Record::builder("Base").field("Id", 7).build();
    let record = Value::from(
        Record::builder("Item")
            .field("Name", "widget")
            .hidden("secret", "x")
            .embed(base)
            .method(Callable::new("Size", || Value::from(3)))
            .method(Callable::fallible("Broken", || Err::<Value, _>("disk on fire")))
            .build(),
    );
    let root = Located::new(record);

    assert_eq!(root.find("Id").raw(), Some(Value::from(7)));
    assert_eq!(root.find("Size").raw(), Some(Value::from(3)));
    assert!(matches!(root.find("secret").error(), Some(PathError::NotFound { .. })));
    assert!(matches!(
        root.find("Broken").error(),
        Some(PathError::CallFailed { message, .. }) if message == "disk on fire"
    ));
}

#[test]
fn test_nil_and_empty_optional_are_nil_elements() {
    let empty = Located::new(Value::from(None::<i32>));
    assert!(empty.is_nil());
    assert!(matches!(empty.find("x").error(), Some(PathError::NilElement)));
    assert!(matches!(
        Located::new(Value::Nil).find("x").error(),
        Some(PathError::NilElement)
    ));
}

#[test]
fn test_scalars_cannot_be_navigated() {
    let found = Located::new(Value::from(5_u8)).find("x");
    assert!(matches!(
        found.error(),
        Some(PathError::UnsupportedElement { kind }) if kind == "u8"
    ));
}

#[derive(Debug)]
struct Environment {
    vars: HashMap<String, String>,
}

impl Navigable for Environment {
    fn get(&self, segment: &str) -> Result<Option<Value>, NavigableError> {
        if segment == "boom" {
            return Err("lookup exploded".into());
        }
        Ok(self.vars.get(segment).map(|v| Value::from(v.as_str())))
    }

    fn raw(&self) -> Value {
        Value::from(self.vars.clone())
    }

    fn format_path(&self, previous: &str, segment: &str) -> Option<String> {
        Some(format!("{previous}/{segment}"))
    }
}

#[test]
fn test_navigable_objects_use_the_adapter() {
    let env = Environment {
        vars: HashMap::from([("HOME".to_string(), "/root".to_string())]),
    };
    let root = Located::adapter(env);

    let home = root.find("HOME");
    assert_eq!(home.path(), "/HOME");
    assert_eq!(home.raw(), Some(Value::from("/root")));

    assert!(matches!(root.find("USER").error(), Some(PathError::NoSuchPath)));
    assert!(matches!(
        root.find("boom").error(),
        Some(PathError::CallFailed { message, .. }) if message == "lookup exploded"
    ));
}

#[test]
fn test_navigable_value_inside_a_record() {
    let env = Environment {
        vars: HashMap::from([("SHELL".to_string(), "zsh".to_string())]),
    };
    let record = Record::builder("Host").field("Env", Value::navigable(env)).build();
    let found = Located::new(Value::from(record)).find_path("Env.SHELL");
    assert_eq!(found.path(), "Env/SHELL");
    assert_eq!(found.raw(), Some(Value::from("zsh")));
}

#[test]
fn test_fast_path_matches_general_resolver() {
    let data = Value::from(json!({"a": [{"b": 1}, {"b": 2}]}));
    let fast = Located::fast(data.clone()).find("a").find(-1_i64).find("b");
    let general = Located::new(data).find("a").find(-1_i64).find("b");
    assert_eq!(fast.path(), general.path());
    assert_eq!(fast.raw(), general.raw());
    assert_eq!(fast.path(), "a[-1].b");
}

#[test]
fn test_shape_predicates() {
    let root = Located::new(Value::from(json!({"s": "x", "n": 1.5, "l": [1], "m": {}})));
    assert!(root.is_map());
    assert!(root.find("s").is_string());
    assert!(root.find("n").is_float());
    assert!(root.find("n").is_numeric());
    assert!(root.find("l").is_slice());
    assert!(root.find("m").is_map());
    assert!(!root.find("zzz").is_string());
}

#[test]
fn test_into_result() {
    let root = Located::new(Value::from(json!({"a": 1})));
    assert_eq!(root.find("a").into_result(), Ok(Value::from(1_i64)));
    assert!(matches!(
        root.find("b").into_result(),
        Err(PathError::NotFound { .. })
    ));
}
