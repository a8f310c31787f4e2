//! Builder tests
//!
//! Tests for the query builder, mirroring src/builder/

use std::sync::Arc;

use pathor::{Located, PathError, Pathor, StandardSemantics, Value};
use serde_json::json;

#[cfg(test)]
mod builder_tests {
    use super::*;

    fn inventory() -> Value {
        Value::from(json!({
            "Store": "north",
            "Items": [
                {"Sku": "a-1", "Qty": 4, "Price": 2.5},
                {"Sku": "b-2", "Qty": 0, "Price": 10},
                {"Sku": "c-3", "Qty": 7, "Price": 1}
            ]
        }))
    }

    #[test]
    fn basic_builder_flow() {
        env_logger::try_init().ok(); // Ignore error if already initialized

        let query = Pathor::query("Items[Qty > 0].Sku")
            .compile()
            .expect("Failed to compile query");

        assert_eq!(query.compiled().source(), "Items[Qty > 0].Sku");
        let found = query.run(&inventory());
        assert_eq!(found.path(), "Items[?].Sku");
        assert_eq!(
            found.raw(),
            Some(Value::from(vec![Value::from("a-1"), Value::from("c-3")]))
        );
    }

    #[test]
    fn test_unwrap_singletons() {
        let query = Pathor::query("Items[Sku='b-2'].Price")
            .unwrap_singletons(true)
            .compile()
            .expect("Failed to compile query");
        assert_eq!(query.value(&inventory()), Ok(Value::from(10)));
    }

    #[test]
    fn test_value_reports_navigation_failure() {
        let query = Pathor::query("Items[Sku='zzz'].Price")
            .compile()
            .expect("Failed to compile query");
        assert_eq!(query.value(&inventory()), Err(PathError::EvaluationFailed));
    }

    #[test]
    fn test_custom_function() {
        env_logger::try_init().ok();

        let query = Pathor::query("$total(Items)")
            .function_with_arity("$total", 1, 1, |_, args| {
                let total: f64 = args[0]
                    .raw()
                    .and_then(|v| v.as_sequence().cloned())
                    .map(|items| {
                        items
                            .iter()
                            .map(|item| {
                                let located = Located::new(item.clone());
                                let qty = located.find("Qty").raw().and_then(|v| v.as_f64());
                                let price = located.find("Price").raw().and_then(|v| v.as_f64());
                                qty.unwrap_or(0.0) * price.unwrap_or(0.0)
                            })
                            .sum()
                    })
                    .unwrap_or(0.0);
                Located::at(args[0].path(), Value::from(total))
            })
            .compile()
            .expect("Failed to compile query");

        assert_eq!(query.value(&inventory()), Ok(Value::from(17.0)));
    }

    #[test]
    fn test_variadic_function() {
        let query = Pathor::query("$join(Store, '/', Items[0].Sku)")
            .function("join", |_, args| {
                let text: String = args
                    .iter()
                    .filter_map(Located::raw)
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect();
                Located::constant(text)
            })
            .compile()
            .expect("Failed to compile query");
        assert_eq!(query.value(&inventory()), Ok(Value::from("north/a-1")));
    }

    #[test]
    fn test_compile_error() {
        env_logger::try_init().ok();

        let error = Pathor::query("Items[Qty >")
            .compile()
            .expect_err("Incomplete filter should not compile");
        assert_eq!(error.expression, "Items[Qty >");
        assert_eq!(error.offset, 11);

        let error = Pathor::query("$missing(Items)")
            .compile()
            .expect_err("Unknown function should not compile");
        assert!(error.reason.contains("$missing"));
    }

    #[test]
    fn test_invalid_function_name() {
        let result = Pathor::query("Store")
            .function("bad name", |_, args| args[0].clone())
            .compile();
        assert!(result.is_err());
    }

    #[test]
    fn test_sequence_cap() {
        let query = Pathor::query("[1..10]")
            .max_sequence_len(5)
            .compile()
            .expect("Failed to compile query");
        assert!(matches!(
            query.value(&Value::Nil),
            Err(PathError::TooLarge { len: 10, limit: 5 })
        ));

        assert!(Pathor::query("Store").max_sequence_len(0).compile().is_err());
    }

    #[test]
    fn test_fast_path_and_semantics() {
        let query = Pathor::query("Items[-1].Sku")
            .fast_path(true)
            .semantics(Arc::new(StandardSemantics))
            .compile()
            .expect("Failed to compile query");
        assert_eq!(query.value(&inventory()), Ok(Value::from("c-3")));
        assert!(query.compiled().config().fast_path);
    }

    #[test]
    fn test_run_json_and_yaml() {
        let query = Pathor::query("Items[Qty = 0].Sku")
            .unwrap_singletons(true)
            .compile()
            .expect("Failed to compile query");

        let json_bytes =
            serde_json::to_vec(&inventory().to_json()).expect("Failed to serialize JSON");
        assert_eq!(query.run_json(json_bytes).raw(), Some(Value::from("b-2")));

        let yaml = "Items:\n  - Sku: x\n    Qty: 0\n  - Sku: y\n    Qty: 1\n";
        assert_eq!(query.run_yaml(yaml.as_bytes()).raw(), Some(Value::from("x")));

        let broken = query.run_json(b"{".as_slice());
        assert!(matches!(
            broken.error(),
            Some(PathError::Decode { format: "json", .. })
        ));
    }

    #[test]
    fn test_compiled_query_is_reusable() {
        let query = Pathor::query("$count(Items)")
            .compile()
            .expect("Failed to compile query");
        for _ in 0..3 {
            assert_eq!(query.value(&inventory()), Ok(Value::from(3)));
        }
        let empty = Value::from(json!({"Items": []}));
        assert_eq!(query.value(&empty), Ok(Value::from(0)));
    }
}
