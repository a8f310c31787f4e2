//! Core `Pathor` builder structure and state types

use std::fmt;
use std::sync::Arc;

use pathor_engine::config::EngineConfig;
use pathor_engine::query::{FunctionRegistry, FunctionRegistryBuilder, Query};
use pathor_engine::semantics::{Semantics, StandardSemantics};

/// State before compilation: query text plus everything the compiler needs
#[derive(Clone)]
pub struct Uncompiled {
    pub(crate) expression: String,
    pub(crate) functions: FunctionRegistryBuilder,
    pub(crate) config: EngineConfig,
    pub(crate) semantics: Arc<dyn Semantics>,
}

/// State after compilation: a re-runnable query
#[derive(Debug, Clone)]
pub struct Compiled {
    pub(crate) query: Query,
}

/// Query builder
///
/// Type parameter `S` tracks the build state:
/// - `Uncompiled`: configuration methods and `compile()` available
/// - `Compiled`: only run methods available
#[derive(Clone)]
pub struct Pathor<S = Uncompiled> {
    /// Type state - stores actual state data, not just a marker
    pub(crate) state: S,
}

impl Pathor<Uncompiled> {
    /// Start building a query from its text
    ///
    /// The built-in functions are registered up front; `function` can add
    /// to or replace them.
    #[must_use]
    pub fn query(expression: impl Into<String>) -> Self {
        Self {
            state: Uncompiled {
                expression: expression.into(),
                functions: FunctionRegistry::builder().with_builtins(),
                config: EngineConfig::default(),
                semantics: Arc::new(StandardSemantics),
            },
        }
    }

    /// Query text
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.state.expression
    }
}

impl Pathor<Compiled> {
    /// Compiled query
    #[must_use]
    pub fn compiled(&self) -> &Query {
        &self.state.query
    }
}

impl fmt::Debug for Pathor<Uncompiled> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pathor")
            .field("expression", &self.state.expression)
            .field("config", &self.state.config)
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for Pathor<Compiled> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pathor")
            .field("query", &self.state.query.source())
            .finish()
    }
}
