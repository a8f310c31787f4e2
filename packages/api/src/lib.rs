//! # Pathor
//!
//! Path navigation and JSONata-style queries over dynamically shaped data.
//!
//! Values are navigated as *located* values: each result carries the
//! breadcrumb path that produced it, and failures are values too, so a
//! chain of lookups never panics and always reports where it went wrong.
//!
//! ## Usage
//!
//! ### Dotted paths
//!
//! ```rust
//! use pathor::Value;
//! use serde_json::json;
//!
//! let data = Value::from(json!({"A": {"B": {"C": 1}}}));
//! assert_eq!(pathor::find(&data, "A.B.C").raw(), Some(Value::from(1_i64)));
//! assert_eq!(pathor::find(&data, "A.B.Z").path(), "A.B.Z");
//! ```
//!
//! ### Queries
//!
//! ```rust
//! use pathor::{Pathor, Value};
//! use serde_json::json;
//!
//! let query = Pathor::query("Children[Name='child2'].Size")
//!     .unwrap_singletons(true)
//!     .compile()
//!     .expect("query should compile");
//! let data = Value::from(json!({"Children": [
//!     {"Name": "child1", "Size": 1},
//!     {"Name": "child2", "Size": 2}
//! ]}));
//! assert_eq!(query.value(&data), Ok(Value::from(2_i64)));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::{Compiled, Pathor, Uncompiled};

// Re-export the engine surface
pub use pathor_engine::{
    combinators, config, error, located, query, resolver, scope, semantics, value,
};
pub use pathor_engine::prelude;
pub use pathor_engine::prelude::*;

/// Navigate a dotted path without compiling a query
#[must_use]
pub fn find(value: &Value, path: &str) -> Located {
    Located::new(value.clone()).find_path(path)
}

/// Compile `expression` with the built-in functions and run it once
///
/// # Errors
///
/// Returns a `QueryError` when the expression does not compile.
pub fn query(value: &Value, expression: &str) -> QueryResult<Located> {
    tracing::debug!(target: "pathor::query", expression, "running one-shot query");
    Ok(compile(expression)?.run(value))
}
