//! Navigation combinators

use std::sync::Arc;

use super::{Expr, Runner};
use crate::located::{FindOptions, Located};
use crate::scope::Scope;
use crate::value::Value;

/// The pipeline value
#[derive(Debug, Clone, Copy, Default)]
pub struct Position;

impl Runner for Position {
    fn run(&self, scope: &Scope) -> Located {
        scope.position().clone()
    }
}

/// The context value (`$` in queries)
#[derive(Debug, Clone, Copy, Default)]
pub struct Current;

impl Runner for Current {
    fn run(&self, scope: &Scope) -> Located {
        scope.current().clone()
    }
}

/// One named step from the pipeline value
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    options: FindOptions,
}

impl Runner for Field {
    fn run(&self, scope: &Scope) -> Located {
        scope.position().find_with(self.name.as_str(), &self.options)
    }
}

/// Steps run in order, each on the previous step's result
///
/// The fold does not stop at a failure; later steps see the invalid value
/// and either extend it or, like `Otherwise`, replace it.
#[derive(Debug, Clone)]
pub struct Path {
    steps: Vec<Expr>,
}

impl Runner for Path {
    fn run(&self, scope: &Scope) -> Located {
        let mut frame = scope.clone();
        let mut last = scope.position().clone();
        for step in &self.steps {
            last = step.run(&frame);
            frame = frame.step(last.clone());
        }
        last
    }
}

/// Run `body` with the result of `source` as context
#[derive(Debug, Clone)]
pub struct Nest {
    source: Expr,
    body: Expr,
}

impl Runner for Nest {
    fn run(&self, scope: &Scope) -> Located {
        let source = propagate!(self.source.run(scope));
        self.body.run(&scope.nest(source))
    }
}

/// Fixed value
#[derive(Debug, Clone)]
pub struct Literal {
    value: Value,
}

impl Runner for Literal {
    fn run(&self, _scope: &Scope) -> Located {
        Located::constant(self.value.clone())
    }
}

/// Pipeline value
#[must_use]
pub fn position() -> Expr {
    Arc::new(Position)
}

/// Context value
#[must_use]
pub fn current() -> Expr {
    Arc::new(Current)
}

/// Named step
pub fn field(name: impl Into<String>) -> Expr {
    Arc::new(Field {
        name: name.into(),
        options: FindOptions::default(),
    })
}

/// Named step with a default for when it does not resolve
pub fn field_or(name: impl Into<String>, default: impl Into<Value>) -> Expr {
    Arc::new(Field {
        name: name.into(),
        options: FindOptions::otherwise(default),
    })
}

/// Steps in order
#[must_use]
pub fn path(steps: Vec<Expr>) -> Expr {
    Arc::new(Path { steps })
}

/// `body` evaluated inside the result of `source`
#[must_use]
pub fn nest(source: Expr, body: Expr) -> Expr {
    Arc::new(Nest { source, body })
}

/// Fixed value
pub fn literal(value: impl Into<Value>) -> Expr {
    Arc::new(Literal {
        value: value.into(),
    })
}
