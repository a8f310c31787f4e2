//! Boolean logic
//!
//! Two families. `And`, `Or` and `Not` make a decision and return a boolean
//! constant. `AndValue` and `OrValue` short-circuit the same way but return
//! the operand that settled the outcome, which is what filter predicates
//! joined with `and`/`or` use.

use std::sync::Arc;

use super::{Expr, Runner};
use crate::located::Located;
use crate::scope::Scope;
use crate::semantics::Truth;

fn settle(path: &str, truth: Truth) -> Located {
    match truth {
        Truth::True => Located::constant_at(path, true),
        Truth::False => Located::constant_at(path, false),
        Truth::Failed(error) => Located::invalid(path, error),
    }
}

/// Both operands truthy
#[derive(Debug, Clone)]
pub struct And {
    left: Expr,
    right: Expr,
}

impl Runner for And {
    fn run(&self, scope: &Scope) -> Located {
        let left = propagate!(self.left.run(scope));
        match scope.semantics().truth(&left) {
            Truth::True => {
                let right = propagate!(self.right.run(scope));
                settle(left.path(), scope.semantics().truth(&right))
            }
            other => settle(left.path(), other),
        }
    }
}

/// Either operand truthy
#[derive(Debug, Clone)]
pub struct Or {
    left: Expr,
    right: Expr,
}

impl Runner for Or {
    fn run(&self, scope: &Scope) -> Located {
        let left = propagate!(self.left.run(scope));
        match scope.semantics().truth(&left) {
            Truth::False => {
                let right = propagate!(self.right.run(scope));
                settle(left.path(), scope.semantics().truth(&right))
            }
            other => settle(left.path(), other),
        }
    }
}

/// Negation
#[derive(Debug, Clone)]
pub struct Not {
    inner: Expr,
}

impl Runner for Not {
    fn run(&self, scope: &Scope) -> Located {
        let inner = propagate!(self.inner.run(scope));
        settle(inner.path(), scope.semantics().truth(&inner).negate())
    }
}

/// `left` when it is falsy, otherwise `right`
#[derive(Debug, Clone)]
pub struct AndValue {
    left: Expr,
    right: Expr,
}

impl Runner for AndValue {
    fn run(&self, scope: &Scope) -> Located {
        let left = propagate!(self.left.run(scope));
        match scope.semantics().truth(&left) {
            Truth::True => self.right.run(scope),
            Truth::False => left,
            Truth::Failed(error) => Located::invalid(left.path(), error),
        }
    }
}

/// `left` when it is truthy, otherwise `right`
#[derive(Debug, Clone)]
pub struct OrValue {
    left: Expr,
    right: Expr,
}

impl Runner for OrValue {
    fn run(&self, scope: &Scope) -> Located {
        let left = propagate!(self.left.run(scope));
        match scope.semantics().truth(&left) {
            Truth::True => left,
            Truth::False => self.right.run(scope),
            Truth::Failed(error) => Located::invalid(left.path(), error),
        }
    }
}

/// Boolean `left and right`
#[must_use]
pub fn and(left: Expr, right: Expr) -> Expr {
    Arc::new(And { left, right })
}

/// Boolean `left or right`
#[must_use]
pub fn or(left: Expr, right: Expr) -> Expr {
    Arc::new(Or { left, right })
}

/// Boolean negation
#[must_use]
pub fn not(inner: Expr) -> Expr {
    Arc::new(Not { inner })
}

/// Value-returning `and`
#[must_use]
pub fn and_value(left: Expr, right: Expr) -> Expr {
    Arc::new(AndValue { left, right })
}

/// Value-returning `or`
#[must_use]
pub fn or_value(left: Expr, right: Expr) -> Expr {
    Arc::new(OrValue { left, right })
}
