//! Conditionals and defaulting

use std::sync::Arc;

use super::{Expr, Runner};
use crate::error::PathError;
use crate::located::Located;
use crate::scope::Scope;
use crate::semantics::Truth;

/// `then` when `cond` is truthy, else `otherwise`
///
/// A missing branch passes the pipeline value through.
#[derive(Debug, Clone)]
pub struct If {
    cond: Expr,
    then: Option<Expr>,
    otherwise: Option<Expr>,
}

impl Runner for If {
    fn run(&self, scope: &Scope) -> Located {
        let cond = propagate!(self.cond.run(scope));
        let branch = match scope.semantics().truth(&cond) {
            Truth::True => &self.then,
            Truth::False => &self.otherwise,
            Truth::Failed(error) => return Located::invalid(cond.path(), error),
        };
        match branch {
            Some(expr) => expr.run(scope),
            None => scope.position().clone(),
        }
    }
}

/// `alternative` when `primary` is invalid or the constant `false`
#[derive(Debug, Clone)]
pub struct Otherwise {
    primary: Expr,
    alternative: Expr,
}

impl Runner for Otherwise {
    fn run(&self, scope: &Scope) -> Located {
        let primary = self.primary.run(scope);
        if primary.is_invalid() || primary.is_false_constant() {
            self.alternative.run(scope)
        } else {
            primary
        }
    }
}

/// First alternative that resolves against the parent scope's context
#[derive(Debug, Clone)]
pub struct FallbackPaths {
    alternatives: Vec<Expr>,
}

impl Runner for FallbackPaths {
    fn run(&self, scope: &Scope) -> Located {
        let base = scope.parent().unwrap_or(scope).current().clone();
        let frame = scope.nest(base);
        let mut last = Located::invalid(frame.position().path(), PathError::NoMatches);
        for alternative in &self.alternatives {
            let found = alternative.run(&frame);
            if !found.is_invalid() {
                return found;
            }
            last = found;
        }
        last
    }
}

/// Conditional with optional branches
#[must_use]
pub fn if_then_else(cond: Expr, then: Option<Expr>, otherwise: Option<Expr>) -> Expr {
    Arc::new(If {
        cond,
        then,
        otherwise,
    })
}

/// Defaulting
#[must_use]
pub fn otherwise(primary: Expr, alternative: Expr) -> Expr {
    Arc::new(Otherwise {
        primary,
        alternative,
    })
}

/// Alternatives tried in order
#[must_use]
pub fn fallback(alternatives: Vec<Expr>) -> Expr {
    Arc::new(FallbackPaths { alternatives })
}
