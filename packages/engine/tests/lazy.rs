//! Lazily decoded JSON and YAML documents

use pathor_engine::error::PathError;
use pathor_engine::located::Located;
use pathor_engine::value::{IntWidth, Value, ValueType};

const CONFIG_YAML: &str = "
server:
  host: localhost
  ports: [8080, 8443]
limits:
  1: low
  2: high
";

#[test]
fn test_json_document_navigates_like_a_value() {
    let doc = Located::lazy_json(br#"{"user": {"name": "ada", "roles": ["admin", "dev"]}}"#.as_slice());
    assert!(doc.is_map());

    let role = doc.find("user").find("roles").find(-1_i64);
    assert_eq!(role.path(), "user.roles[-1]");
    assert_eq!(role.raw(), Some(Value::from("dev")));
}

#[test]
fn test_yaml_document() {
    let doc = Located::lazy_yaml(CONFIG_YAML.as_bytes());
    assert_eq!(doc.find_path("server.host").raw(), Some(Value::from("localhost")));
    assert_eq!(
        doc.find("server").find("ports").find(0_i64).raw(),
        Some(Value::from(8080))
    );
}

#[test]
fn test_yaml_integer_keys_are_coerced() {
    let doc = Located::lazy_yaml(CONFIG_YAML.as_bytes());
    let limits = doc.find("limits");
    assert_eq!(
        limits.value_type(),
        Some(ValueType::map_of(ValueType::Int(IntWidth::I64), ValueType::Any))
    );
    assert_eq!(limits.find("2").raw(), Some(Value::from("high")));
    assert!(matches!(
        limits.find("two").error(),
        Some(PathError::BadKey { .. })
    ));
}

#[test]
fn test_malformed_json_is_a_decode_failure() {
    let doc = Located::lazy_json(b"{\"a\": ".as_slice());
    assert!(doc.is_invalid());

    let found = doc.find("a").find("b");
    assert_eq!(found.path(), "a.b");
    assert!(matches!(
        found.error(),
        Some(PathError::Decode { format: "json", .. })
    ));
    assert!(found.failure().is_some_and(|f| f.to_string().contains("json")));
}

#[test]
fn test_clones_share_the_decoded_root() {
    let doc = Located::lazy_json(b"[1, 2, 3]".to_vec());
    let copy = doc.clone();
    assert_eq!(doc.raw(), Some(Value::from(vec![1, 2, 3])));
    match &copy {
        Located::LazyJson(inner) => assert!(inner.is_decoded()),
        other => panic!("unexpected variant {other:?}"),
    }
}
