//! End-to-end query tests
//!
//! Compile query text and run it against decoded documents.

use std::sync::Arc;
use std::thread;

use pathor_engine::combinators::arithmetic::{ArithOp, apply};
use pathor_engine::config::EngineConfig;
use pathor_engine::error::PathError;
use pathor_engine::located::Located;
use pathor_engine::query::{Compiler, FunctionRegistry, compile};
use pathor_engine::value::Value;
use serde_json::json;

fn tree() -> Value {
    Value::from(json!({
        "Name": "root",
        "Children": [
            {"Name": "child1", "Size": 1, "Tags": ["a"]},
            {"Name": "child2", "Size": 2, "Tags": ["a", "b"]},
            {"Name": "child3", "Size": 3, "Tags": []}
        ]
    }))
}

fn run(text: &str) -> Located {
    compile(text)
        .unwrap_or_else(|e| panic!("{text} should compile: {e}"))
        .run(&tree())
}

fn strings(items: &[&str]) -> Value {
    Value::from(items.iter().map(|s| Value::from(*s)).collect::<Vec<_>>())
}

#[test]
fn test_filter_keeps_sequence_shape() {
    let found = run("Children[Name='child2'].Size");
    assert_eq!(found.path(), "Children[?].Size");
    assert_eq!(found.raw(), Some(Value::from(vec![2])));
}

#[test]
fn test_unwrap_singletons_returns_scalar() {
    let query = Compiler::default()
        .with_config(EngineConfig::default().with_unwrap_singletons(true))
        .compile("Children[Name='child2'].Size")
        .expect("query should compile");
    assert_eq!(query.run(&tree()).raw(), Some(Value::from(2)));

    // Longer results are left alone
    let many = Compiler::default()
        .with_config(EngineConfig::default().with_unwrap_singletons(true))
        .compile("Children.Size")
        .expect("query should compile");
    assert_eq!(many.run(&tree()).raw(), Some(Value::from(vec![1, 2, 3])));
}

#[test]
fn test_filter_conditions() {
    assert_eq!(
        run("Children[Size > 1].Name").raw(),
        Some(strings(&["child2", "child3"]))
    );
    assert_eq!(
        run("Children[Size >= 2 and Name != 'child3'].Name").raw(),
        Some(strings(&["child2"]))
    );
    assert_eq!(
        run("Children[Size = 1 or (Size = 3)].Name").raw(),
        Some(strings(&["child1", "child3"]))
    );
    assert_eq!(
        run("Children[Size + 1 = 3].Name").raw(),
        Some(strings(&["child2"]))
    );
}

#[test]
fn test_membership() {
    assert_eq!(
        run("Children[Name in ['child1', 'child3']].Size").raw(),
        Some(Value::from(vec![1, 3]))
    );
    assert_eq!(
        run("Children['b' in Tags].Name").raw(),
        Some(strings(&["child2"]))
    );
    assert_eq!(
        run("Children[Size in [2..3]].Name").raw(),
        Some(strings(&["child2", "child3"]))
    );
}

#[test]
fn test_indexes_and_slices() {
    assert_eq!(run("Children[0].Name").raw(), Some(Value::from("child1")));
    assert_eq!(run("Children[-1].Name").raw(), Some(Value::from("child3")));
    assert_eq!(
        run("Children[1:].Name").raw(),
        Some(strings(&["child2", "child3"]))
    );
    assert!(matches!(
        run("Children[7]").error(),
        Some(PathError::IndexOutOfRange { index: 7, len: 3 })
    ));

    let not_array = run("Name[1]");
    assert_eq!(not_array.path(), "Name[1]");
    assert!(matches!(not_array.error(), Some(PathError::IndexNotAnArray { .. })));

    let crossed = run("Children[2:1]");
    assert_eq!(crossed.path(), "Children[2:1]");
    assert!(matches!(
        crossed.error(),
        Some(PathError::IndexOutOfRange { index: 1, len: 3 })
    ));
}

#[test]
fn test_concatenation_and_arithmetic() {
    assert_eq!(
        run("Name & '-' & Children[-1].Name").raw(),
        Some(Value::from("root-child3"))
    );
    assert_eq!(run("Children[0].Size + 1").raw(), Some(Value::from(2.0)));
}

#[test]
fn test_literals_arrays_and_ranges() {
    assert_eq!(run("[1..4]").raw(), Some(Value::from(vec![1, 2, 3, 4])));
    assert_eq!(run("['a', 'b']").raw(), Some(strings(&["a", "b"])));
    assert_eq!(run("'x'").raw(), Some(Value::from("x")));
    assert!(run("42").is_constant());
}

#[test]
fn test_builtins() {
    assert_eq!(run("$count(Children)").raw(), Some(Value::from(3)));
    assert_eq!(run("$sum(Children.Size)").raw(), Some(Value::from(6.0)));
    assert_eq!(run("$sum([1..4])").raw(), Some(Value::from(10.0)));
    assert_eq!(run("$max(Children.Size)").raw(), Some(Value::from(3)));
    assert_eq!(run("$min(Children.Size)").raw(), Some(Value::from(1)));
    assert_eq!(run("$string(Children[0].Size) & '!'").raw(), Some(Value::from("1!")));
    assert_eq!(run("$number('2.5')").raw(), Some(Value::from(2.5)));
    assert_eq!(run("$length(Name)").raw(), Some(Value::from(4)));
    assert_eq!(run("$exists(Missing)").raw(), Some(Value::Bool(false)));
    assert_eq!(run("$boolean(Name)").raw(), Some(Value::Bool(true)));
    assert_eq!(run("$first(Children).Name").raw(), Some(Value::from("child1")));
    assert_eq!(run("$last(Children.Name)").raw(), Some(Value::from("child3")));
    assert_eq!(
        run("$distinct(Children.Tags[0])").raw(),
        Some(strings(&["a"]))
    );
    assert_eq!(
        run("$union(['a'], ['b', 'a'])").raw(),
        Some(strings(&["a", "b"]))
    );
    assert_eq!(
        run("$intersection([1..3], [2..5])").raw(),
        Some(Value::from(vec![2, 3]))
    );
    assert_eq!(
        run("$append([1], [1])").raw(),
        Some(Value::from(vec![1, 1]))
    );
    assert_eq!(
        run("$contains(Name, 'oo')").raw(),
        Some(Value::Bool(true))
    );
    assert_eq!(
        run("$keys(Children[0])").raw().and_then(|v| v.as_sequence().map(|s| s.len())),
        Some(3)
    );
}

#[test]
fn test_functions_inside_filters() {
    assert_eq!(
        run("Children[$exists(Tags[1])].Name").raw(),
        Some(strings(&["child2"]))
    );
    assert_eq!(
        run("Children[$count(Tags) = 0].Name").raw(),
        Some(strings(&["child3"]))
    );
}

#[test]
fn test_failed_filter_is_invalid_downstream() {
    let found = run("Children[Name='nobody'].Size");
    assert_eq!(found.path(), "Children[?].Size");
    assert!(matches!(found.error(), Some(PathError::EvaluationFailed)));

    assert!(run("$count(Children[Name='nobody'])").is_invalid());
}

#[test]
fn test_comments_and_quoted_names() {
    assert_eq!(run("/* the root */ Name").raw(), Some(Value::from("root")));
    assert_eq!(run("`Name`").raw(), Some(Value::from("root")));
}

#[test]
fn test_compile_errors_carry_offsets() {
    env_logger::try_init().ok(); // Ignore error if already initialized

    let error = compile("Name #").expect_err("stray character");
    assert_eq!(error.offset, 5);
    assert_eq!(error.expression, "Name #");

    let error = compile("$nope()").expect_err("unknown function");
    assert_eq!(error.offset, 0);

    let error = compile("Children[0").expect_err("unterminated index");
    assert_eq!(error.offset, 10);

    let error = compile("'open").expect_err("unterminated string");
    assert_eq!(error.offset, 0);

    assert!(compile("Children[Name=]").is_err());
    assert!(compile("").is_err());
}

#[test]
fn test_operator_chains_are_bounded() {
    let sum = run(&format!("{}1", "1 + ".repeat(99)));
    assert_eq!(sum.raw(), Some(Value::from(100.0)));

    let error = compile(&format!("{}1", "1+".repeat(3000))).expect_err("chain too long");
    assert_eq!(error.reason, "expression nested too deeply");
    assert!(error.offset > 0);

    let text = format!("Children[{}Size = 2]", "Size > 0 and ".repeat(3000));
    let error = compile(&text).expect_err("conjunction too long");
    assert_eq!(error.reason, "expression nested too deeply");
}

#[test]
fn test_custom_function_registry() {
    let registry = FunctionRegistry::builder()
        .with_builtins()
        .register("$double", 1, 1, |_, args| {
            let value = args[0].raw().unwrap_or_default();
            match apply(ArithOp::Multiply, &value, &Value::from(2)) {
                Ok(doubled) => Located::at(args[0].path(), doubled),
                Err(error) => Located::invalid(args[0].path(), error),
            }
        })
        .build();
    assert!(registry.contains("double"));
    assert!(registry.contains("count"));

    let query = Compiler::new(registry)
        .compile("$double(Children[1].Size)")
        .expect("registered function should compile");
    assert_eq!(query.run(&tree()).raw(), Some(Value::from(4.0)));

    let bare = Compiler::new(FunctionRegistry::builder().build());
    assert!(bare.compile("$count(Children)").is_err());
}

#[test]
fn test_fast_path_gives_same_answers() {
    let fast = Compiler::default().with_config(EngineConfig::default().with_fast_path(true));
    for text in ["Children[Name='child2'].Size", "Children[-1].Tags", "Name & '!'"] {
        let general = run(text);
        let quick = fast.compile(text).expect("query should compile").run(&tree());
        assert_eq!(quick.raw(), general.raw(), "{text}");
        assert_eq!(quick.path(), general.path(), "{text}");
    }
}

#[test]
fn test_query_is_shared_across_threads() {
    let query = Arc::new(compile("Children[Size > 1].Name").expect("query should compile"));
    let data = Arc::new(tree());

    thread::scope(|s| {
        for _ in 0..4 {
            let query = Arc::clone(&query);
            let data = Arc::clone(&data);
            s.spawn(move || {
                for _ in 0..50 {
                    assert_eq!(
                        query.run(&data).raw(),
                        Some(strings(&["child2", "child3"]))
                    );
                }
            });
        }
    });
}

#[test]
fn test_query_over_lazy_document() {
    env_logger::try_init().ok();

    let query = compile("Children[Size > 2].Name").expect("query should compile");
    let bytes = serde_json::to_vec(&json!({
        "Children": [{"Name": "small", "Size": 1}, {"Name": "big", "Size": 9}]
    }))
    .expect("document should encode");

    let found = query.run_located(Located::lazy_json(bytes));
    assert_eq!(found.raw(), Some(strings(&["big"])));
}
