//! Free-function entry points: `find` and `query`

use pathor::{PathError, Record, Value};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
struct Server {
    name: String,
    ports: Vec<u16>,
    tls: Option<Tls>,
}

#[derive(Serialize)]
struct Tls {
    cert: String,
}

#[test]
fn test_find_on_records() {
    let inner = Record::builder("C").field("C", 1).build();
    let middle = Record::builder("B").field("B", inner).build();
    let data = Value::from(Record::builder("A").field("A", middle).build());

    assert_eq!(pathor::find(&data, "A.B.C").raw(), Some(Value::from(1)));

    let missing = pathor::find(&data, "A.B.Z");
    assert_eq!(missing.path(), "A.B.Z");
    assert!(matches!(missing.error(), Some(PathError::NotFound { .. })));
}

#[test]
fn test_find_on_serialized_structs() {
    let server = Server {
        name: "edge".to_string(),
        ports: vec![80, 443],
        tls: None,
    };
    let data = pathor::to_value(&server).expect("Failed to convert struct");

    assert_eq!(pathor::find(&data, "name").raw(), Some(Value::from("edge")));
    assert_eq!(pathor::find(&data, "ports.1").raw(), Some(Value::from(443_u16)));
    assert!(matches!(
        pathor::find(&data, "tls.cert").error(),
        Some(PathError::NilElement)
    ));
}

#[test]
fn test_one_shot_query() {
    let data = Value::from(json!({"a": [1, 2, 3]}));
    let found = pathor::query(&data, "$sum(a)").expect("Failed to compile query");
    assert_eq!(found.raw(), Some(Value::from(6.0)));

    let error = pathor::query(&data, "a[").expect_err("Incomplete index should not compile");
    assert_eq!(error.offset, 2);
}
