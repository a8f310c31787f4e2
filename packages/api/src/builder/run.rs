//! Run methods for the compiled builder

use std::sync::Arc;

use pathor_engine::error::PathResult;
use pathor_engine::located::Located;
use pathor_engine::value::Value;

use super::core::{Compiled, Pathor};

impl Pathor<Compiled> {
    /// Run against a value
    #[must_use]
    pub fn run(&self, value: &Value) -> Located {
        self.state.query.run(value)
    }

    /// Run against a JSON document, decoded on first navigation
    #[must_use]
    pub fn run_json(&self, bytes: impl Into<Arc<[u8]>>) -> Located {
        self.state.query.run_located(Located::lazy_json(bytes))
    }

    /// Run against a YAML document, decoded on first navigation
    #[must_use]
    pub fn run_yaml(&self, bytes: impl Into<Arc<[u8]>>) -> Located {
        self.state.query.run_located(Located::lazy_yaml(bytes))
    }

    /// Run and leave the located-value world
    ///
    /// # Errors
    ///
    /// Returns the `PathError` of an invalid result.
    pub fn value(&self, value: &Value) -> PathResult<Value> {
        self.run(value).into_result()
    }
}
