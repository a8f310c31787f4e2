//! Query compiler and compiled queries
//!
//! Lowers the parsed tree into a combinator tree. A `Query` is immutable
//! and can be run any number of times, from any number of threads.

use std::fmt;
use std::sync::Arc;

use super::ast::{BinaryOp, Clause, FunctionNode, Node, Step, StepKind};
use super::functions::{Call, FunctionRegistry};
use super::parser::parse;
use crate::combinators::{
    Expr, add, and_value, compare, concat, contains, current, field, filter, index, literal,
    or_value, path, position, sequence, slice,
};
use crate::config::{EngineConfig, Validator};
use crate::error::{QueryResult, invalid_query_error};
use crate::located::Located;
use crate::scope::{Environment, Scope};
use crate::semantics::{CompareOp, Semantics, StandardSemantics};
use crate::value::{Sequence, Value};

/// Query compiler bound to a function registry, configuration and semantics
#[derive(Debug, Clone)]
pub struct Compiler {
    registry: Arc<FunctionRegistry>,
    config: EngineConfig,
    semantics: Arc<dyn Semantics>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(FunctionRegistry::standard())
    }
}

impl Compiler {
    /// Compiler resolving function calls against `registry`
    #[must_use]
    pub fn new(registry: FunctionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            config: EngineConfig::default(),
            semantics: Arc::new(StandardSemantics),
        }
    }

    /// Use `config` for queries compiled from now on
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `semantics` for truthiness and comparison
    #[must_use]
    pub fn with_semantics(mut self, semantics: Arc<dyn Semantics>) -> Self {
        self.semantics = semantics;
        self
    }

    /// Function registry snapshot
    #[must_use]
    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Engine configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compile query text
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` for empty text, syntax errors, calls to
    /// unregistered functions, and invalid configuration or function names
    /// (reported at offset 0).
    pub fn compile(&self, text: &str) -> QueryResult<Query> {
        tracing::debug!(target: "pathor::query", query = text, "compiling query");

        if text.trim().is_empty() {
            return Err(invalid_query_error(text, "empty expression not allowed", 0));
        }
        self.config
            .validate()
            .and_then(|()| self.registry.validate())
            .map_err(|error| invalid_query_error(text, error.to_string(), 0))?;

        let tree = parse(text)?;
        let root = Lowering {
            text,
            registry: &self.registry,
        }
        .lower(&tree)?;

        Ok(Query {
            source: text.to_string(),
            root,
            env: Arc::new(Environment::new(
                self.config.clone(),
                Arc::clone(&self.semantics),
            )),
        })
    }
}

/// Compile with the built-in functions and default configuration
///
/// # Errors
///
/// Returns a `QueryError` when the text does not parse or calls an unknown
/// function.
///
/// # Examples
/// ```
/// use pathor_engine::query::compile;
/// use pathor_engine::value::Value;
///
/// let query = compile("A & '-' & B").expect("valid query");
/// let data = Value::from(serde_json::json!({"A": "x", "B": 2}));
/// assert_eq!(query.run(&data).raw(), Some(Value::from("x-2")));
/// ```
pub fn compile(text: &str) -> QueryResult<Query> {
    Compiler::default().compile(text)
}

struct Lowering<'a> {
    text: &'a str,
    registry: &'a FunctionRegistry,
}

impl Lowering<'_> {
    fn lower(&self, node: &Node) -> QueryResult<Expr> {
        match node {
            Node::Path(p) => {
                let steps = p
                    .steps
                    .iter()
                    .enumerate()
                    .map(|(i, step)| self.lower_step(step, i == 0))
                    .collect::<QueryResult<Vec<_>>>()?;
                Ok(match <[Expr; 1]>::try_from(steps) {
                    Ok([single]) => single,
                    Err(steps) => path(steps),
                })
            }
            Node::Binary(b) => {
                let left = self.lower(&b.left)?;
                let right = self.lower(&b.right)?;
                Ok(match b.operator {
                    BinaryOp::Add => add(left, right),
                    BinaryOp::Concat => concat(left, right),
                    BinaryOp::Eq => compare(CompareOp::Eq, left, right),
                    BinaryOp::NotEq => compare(CompareOp::NotEq, left, right),
                    BinaryOp::Less => compare(CompareOp::Less, left, right),
                    BinaryOp::LessEq => compare(CompareOp::LessEq, left, right),
                    BinaryOp::Greater => compare(CompareOp::Greater, left, right),
                    BinaryOp::GreaterEq => compare(CompareOp::GreaterEq, left, right),
                    // `x in coll` tests the collection, so it yields a boolean
                    BinaryOp::In => contains(right, left),
                    BinaryOp::And => and_value(left, right),
                    BinaryOp::Or => or_value(left, right),
                })
            }
            Node::Literal(lit) => Ok(literal(lit.value.clone())),
            Node::Array(array) => Ok(literal(Sequence::infer(
                array.items.iter().map(|item| item.value.clone()).collect(),
            ))),
            Node::Range(range) => Ok(sequence(literal(range.start), literal(range.end))),
            Node::Function(call) => self.lower_call(call),
        }
    }

    fn lower_step(&self, step: &Step, first: bool) -> QueryResult<Expr> {
        let mut expr = match &step.kind {
            StepKind::Name(name) => field(name.as_str()),
            StepKind::Context if first => current(),
            StepKind::Context => position(),
            StepKind::SubExpr(inner) => self.lower(inner)?,
            StepKind::Function(call) => self.lower_call(call)?,
        };
        for clause in &step.clauses {
            expr = match clause {
                Clause::Index(i) => index(expr, literal(*i)),
                Clause::Slice { start, end } => {
                    slice(expr, start.map(literal), end.map(literal))
                }
                Clause::Filter(condition) => filter(expr, self.lower(condition)?),
            };
        }
        Ok(expr)
    }

    fn lower_call(&self, call: &FunctionNode) -> QueryResult<Expr> {
        let Some(function) = self.registry.get(&call.name) else {
            return Err(invalid_query_error(
                self.text,
                format!("unknown function ${}", call.name),
                call.offset,
            ));
        };
        let args = call
            .args
            .iter()
            .map(|arg| self.lower(arg))
            .collect::<QueryResult<Vec<_>>>()?;
        Ok(Call::expr(function.clone(), args))
    }
}

/// Compiled, re-runnable query
#[derive(Clone)]
pub struct Query {
    source: String,
    root: Expr,
    env: Arc<Environment>,
}

impl Query {
    /// Query text this was compiled from
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root combinator
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.root
    }

    /// Configuration the query runs with
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.env.config()
    }

    /// Run against a value
    #[must_use]
    pub fn run(&self, value: &Value) -> Located {
        let root = if self.env.config().fast_path {
            Located::fast(value.clone())
        } else {
            Located::new(value.clone())
        };
        self.run_located(root)
    }

    /// Run against an already located root, such as a lazy document
    #[must_use]
    pub fn run_located(&self, root: Located) -> Located {
        let scope = Scope::with_env(root, Arc::clone(&self.env));
        let result = self.root.run(&scope);
        if self.env.config().unwrap_singletons {
            unwrap_singleton(result)
        } else {
            result
        }
    }
}

impl fmt::Debug for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("source", &self.source)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// A one-element sequence becomes its element
fn unwrap_singleton(result: Located) -> Located {
    let single = result.raw().and_then(|value| {
        value
            .as_sequence()
            .filter(|seq| seq.len() == 1)
            .and_then(|seq| seq.get(0).cloned())
    });
    match single {
        Some(item) => Located::at(result.path(), item),
        None => result,
    }
}
