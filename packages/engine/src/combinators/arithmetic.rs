//! Arithmetic combinators
//!
//! Operands are converted to `f64`; only numeric kinds convert. Results are
//! `f64`, except modulo, which works on integers.

use std::sync::Arc;

use super::{Expr, Runner};
use crate::error::{PathError, type_mismatch};
use crate::located::Located;
use crate::scope::Scope;
use crate::value::{Value, canonical_string};

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
}

/// Binary arithmetic
#[derive(Debug, Clone)]
pub struct Arithmetic {
    op: ArithOp,
    left: Expr,
    right: Expr,
}

impl Arithmetic {
    /// Combine `left` and `right` with `op`
    #[must_use]
    pub fn new(op: ArithOp, left: Expr, right: Expr) -> Self {
        Self { op, left, right }
    }
}

impl Runner for Arithmetic {
    fn run(&self, scope: &Scope) -> Located {
        let left = propagate!(self.left.run(scope));
        let right = propagate!(self.right.run(scope));
        let path = left.path().to_string();
        let (l, r) = (left.raw().unwrap_or_default(), right.raw().unwrap_or_default());
        match apply(self.op, &l, &r) {
            Ok(value) => Located::at(path, value),
            Err(error) => Located::invalid(path, error),
        }
    }
}

/// Apply `op` to two values
///
/// # Errors
///
/// `TypeMismatch` when either operand is not numeric, `DivisionByZero` and
/// `ModuloByZero` for zero divisors, `NotIntegral` for fractional modulo
/// operands.
pub fn apply(op: ArithOp, left: &Value, right: &Value) -> Result<Value, PathError> {
    let (Some(a), Some(b)) = (left.as_f64(), right.as_f64()) else {
        return Err(type_mismatch(left, right));
    };
    match op {
        ArithOp::Add => Ok(Value::f64(a + b)),
        ArithOp::Subtract => Ok(Value::f64(a - b)),
        ArithOp::Multiply => Ok(Value::f64(a * b)),
        ArithOp::Divide if b == 0.0 => Err(PathError::DivisionByZero),
        ArithOp::Divide => Ok(Value::f64(a / b)),
        ArithOp::Modulo => {
            let x = integral(left)?;
            let y = integral(right)?;
            if y == 0 {
                return Err(PathError::ModuloByZero);
            }
            Ok(Value::i64(x.wrapping_rem(y)))
        }
    }
}

fn integral(value: &Value) -> Result<i64, PathError> {
    value
        .as_i64()
        .ok_or_else(|| PathError::NotIntegral(canonical_string(value)))
}

fn binary(op: ArithOp, left: Expr, right: Expr) -> Expr {
    Arc::new(Arithmetic::new(op, left, right))
}

/// `left + right`
#[must_use]
pub fn add(left: Expr, right: Expr) -> Expr {
    binary(ArithOp::Add, left, right)
}

/// `left - right`
#[must_use]
pub fn subtract(left: Expr, right: Expr) -> Expr {
    binary(ArithOp::Subtract, left, right)
}

/// `left * right`
#[must_use]
pub fn multiply(left: Expr, right: Expr) -> Expr {
    binary(ArithOp::Multiply, left, right)
}

/// `left / right`
#[must_use]
pub fn divide(left: Expr, right: Expr) -> Expr {
    binary(ArithOp::Divide, left, right)
}

/// `left % right`
#[must_use]
pub fn modulo(left: Expr, right: Expr) -> Expr {
    binary(ArithOp::Modulo, left, right)
}
