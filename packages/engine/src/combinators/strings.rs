//! String concatenation

use std::sync::Arc;

use super::{Expr, Runner};
use crate::located::Located;
use crate::scope::Scope;
use crate::value::{Value, canonical_string};

/// `left & right`
///
/// Never fails: nil and invalid operands contribute an empty string.
#[derive(Debug, Clone)]
pub struct Concat {
    left: Expr,
    right: Expr,
}

impl Runner for Concat {
    fn run(&self, scope: &Scope) -> Located {
        let left = self.left.run(scope);
        let right = self.right.run(scope);
        let text = format!("{}{}", text_of(&left), text_of(&right));
        Located::at(left.path().to_string(), Value::String(text))
    }
}

/// Canonical text of a located value; empty for invalid values
#[must_use]
pub fn text_of(located: &Located) -> String {
    located
        .raw()
        .map(|value| canonical_string(&value))
        .unwrap_or_default()
}

/// `left & right`
#[must_use]
pub fn concat(left: Expr, right: Expr) -> Expr {
    Arc::new(Concat { left, right })
}
