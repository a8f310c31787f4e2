//! Comparison combinators

use std::sync::Arc;

use super::{Expr, Runner};
use crate::located::Located;
use crate::scope::Scope;
use crate::semantics::CompareOp;

/// Compare two operands through the scope's semantics
#[derive(Debug, Clone)]
pub struct Compare {
    op: CompareOp,
    left: Expr,
    right: Expr,
}

impl Compare {
    /// Compare `left` to `right` with `op`
    #[must_use]
    pub fn new(op: CompareOp, left: Expr, right: Expr) -> Self {
        Self { op, left, right }
    }
}

impl Runner for Compare {
    fn run(&self, scope: &Scope) -> Located {
        let left = propagate!(self.left.run(scope));
        let right = propagate!(self.right.run(scope));
        let path = left.path().to_string();
        let (l, r) = (left.raw().unwrap_or_default(), right.raw().unwrap_or_default());
        match scope.semantics().compare(&l, self.op, &r) {
            Ok(result) => Located::constant_at(path, result),
            Err(error) => Located::invalid(path, error),
        }
    }
}

/// Comparison with an explicit operator
#[must_use]
pub fn compare(op: CompareOp, left: Expr, right: Expr) -> Expr {
    Arc::new(Compare::new(op, left, right))
}

/// `left = right`
#[must_use]
pub fn eq(left: Expr, right: Expr) -> Expr {
    compare(CompareOp::Eq, left, right)
}

/// `left != right`
#[must_use]
pub fn neq(left: Expr, right: Expr) -> Expr {
    compare(CompareOp::NotEq, left, right)
}

/// `left > right`
#[must_use]
pub fn gt(left: Expr, right: Expr) -> Expr {
    compare(CompareOp::Greater, left, right)
}

/// `left < right`
#[must_use]
pub fn lt(left: Expr, right: Expr) -> Expr {
    compare(CompareOp::Less, left, right)
}

/// `left >= right`
#[must_use]
pub fn gte(left: Expr, right: Expr) -> Expr {
    compare(CompareOp::GreaterEq, left, right)
}

/// `left <= right`
#[must_use]
pub fn lte(left: Expr, right: Expr) -> Expr {
    compare(CompareOp::LessEq, left, right)
}
