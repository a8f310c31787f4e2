//! Combinator library
//!
//! Every operator in a compiled query is a `Runner`: a pure function from a
//! scope to a located value. Runners hold their operands as `Expr` handles,
//! are immutable once built and can be run from many threads at once.
//!
//! Unless documented otherwise an invalid operand is returned as is, and
//! operands are evaluated left to right, so the first failure wins.

use std::fmt;
use std::sync::Arc;

use crate::located::Located;
use crate::scope::Scope;
use crate::value::Value;

/// Return an invalid located value from the enclosing function
macro_rules! propagate {
    ($located:expr) => {{
        let located = $located;
        if located.is_invalid() {
            return located;
        }
        located
    }};
}

pub(crate) use propagate;

pub mod arithmetic;
pub mod collection;
pub mod comparison;
pub mod conditional;
pub mod logic;
pub mod navigation;
pub mod sequence;
pub mod sets;
pub mod strings;

pub use arithmetic::{ArithOp, Arithmetic, add, divide, modulo, multiply, subtract};
pub use collection::{
    Any, Contains, Every, Filter, First, In, Last, Map, any, contains, every, filter, first, is_in,
    last, map,
};
pub use comparison::{Compare, compare, eq, gt, gte, lt, lte, neq};
pub use conditional::{FallbackPaths, If, Otherwise, fallback, if_then_else, otherwise};
pub use logic::{And, AndValue, Not, Or, OrValue, and, and_value, not, or, or_value};
pub use navigation::{
    Current, Field, Literal, Nest, Path, Position, current, field, field_or, literal, nest, path,
    position,
};
pub use sequence::{Index, Range, SequenceGen, generate, index, sequence, slice};
pub use sets::{
    Append, Intersection, Union, append, append_of, intersection, intersection_of, union, union_of,
};
pub use strings::{Concat, concat};

/// Operator in a compiled query
pub trait Runner: Send + Sync + fmt::Debug {
    /// Evaluate against a scope
    fn run(&self, scope: &Scope) -> Located;
}

/// Shared handle to a runner
pub type Expr = Arc<dyn Runner>;

/// Runner backed by a closure
pub struct FnRunner<F> {
    name: &'static str,
    func: F,
}

impl<F> Runner for FnRunner<F>
where
    F: Fn(&Scope) -> Located + Send + Sync,
{
    fn run(&self, scope: &Scope) -> Located {
        (self.func)(scope)
    }
}

impl<F> fmt::Debug for FnRunner<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnRunner").field(&self.name).finish()
    }
}

/// Wrap a closure as an expression
pub fn from_fn<F>(name: &'static str, func: F) -> Expr
where
    F: Fn(&Scope) -> Located + Send + Sync + 'static,
{
    Arc::new(FnRunner { name, func })
}

/// Run an expression with `value` as root
#[must_use]
pub fn evaluate(expr: &Expr, value: Value) -> Located {
    expr.run(&Scope::root(Located::new(value)))
}
