//! Function call combinator

use std::sync::Arc;

use super::Function;
use crate::combinators::{Expr, Runner};
use crate::located::Located;
use crate::scope::Scope;

/// Call of a registry function
///
/// Arguments are evaluated left to right in the caller's scope. With no
/// explicit arguments a function that needs one receives the current
/// position instead, so `Items.$count()` counts `Items`.
#[derive(Debug, Clone)]
pub struct Call {
    function: Function,
    args: Vec<Expr>,
}

impl Call {
    /// Create a call
    #[must_use]
    pub fn new(function: Function, args: Vec<Expr>) -> Self {
        Self { function, args }
    }

    /// Create a call as an expression
    #[must_use]
    pub fn expr(function: Function, args: Vec<Expr>) -> Expr {
        Arc::new(Self::new(function, args))
    }
}

impl Runner for Call {
    fn run(&self, scope: &Scope) -> Located {
        let args: Vec<Located> = if self.args.is_empty() && self.function.min_args() > 0 {
            vec![scope.position().clone()]
        } else {
            self.args.iter().map(|arg| arg.run(scope)).collect()
        };
        self.function.call(scope, &args)
    }
}
