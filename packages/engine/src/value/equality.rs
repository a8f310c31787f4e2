//! Deep structural equality
//!
//! Numbers compare by value regardless of width or signedness. An empty
//! optional equals nil. Callables and navigable objects compare by identity.

use std::sync::Arc;

use super::Value;

/// Structural equality with numeric leniency across widths
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    let (a, b) = match (a.deref_value(), b.deref_value()) {
        (None | Some(Value::Nil), None | Some(Value::Nil)) => return true,
        (Some(a), Some(b)) => (a, b),
        _ => return false,
    };

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Sequence(x), Value::Sequence(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| deep_equal(l, r))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x
                    .entries()
                    .iter()
                    .all(|(k, v)| y.get(k).is_some_and(|other| deep_equal(v, other)))
        }
        (Value::Record(x), Value::Record(y)) => {
            if Arc::ptr_eq(x, y) {
                return true;
            }
            let (xf, yf) = (x.visible_fields(), y.visible_fields());
            x.type_name() == y.type_name()
                && xf.len() == yf.len()
                && xf
                    .iter()
                    .zip(yf.iter())
                    .all(|((xn, xv), (yn, yv))| xn == yn && deep_equal(xv, yv))
        }
        (Value::Callable(x), Value::Callable(y)) => x.same_as(y),
        (Value::Navigable(x), Value::Navigable(y)) => Arc::ptr_eq(x, y),
        _ if a.is_numeric() && b.is_numeric() => numeric_equal(a, b),
        _ => false,
    }
}

fn numeric_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(x, _), Value::Int(y, _)) => x == y,
        (Value::Uint(x, _), Value::Uint(y, _)) => x == y,
        (Value::Int(x, _), Value::Uint(y, _)) | (Value::Uint(y, _), Value::Int(x, _)) => {
            i128::from(*x) == i128::from(*y)
        }
        (Value::Complex(x, _), Value::Complex(y, _)) => x == y,
        (Value::Complex(c, _), other) | (other, Value::Complex(c, _)) => {
            c.im == 0.0 && other.as_f64() == Some(c.re)
        }
        _ => a.as_f64() == b.as_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{FloatWidth, IntWidth, Optional, UintWidth, ValueType};

    #[test]
    fn test_numbers_equal_across_widths() {
        assert!(deep_equal(&Value::Int(3, IntWidth::I8), &Value::Uint(3, UintWidth::U64)));
        assert!(deep_equal(&Value::Int(3, IntWidth::I32), &Value::Float(3.0, FloatWidth::F64)));
        assert!(!deep_equal(&Value::Int(-1, IntWidth::I64), &Value::Uint(u64::MAX, UintWidth::U64)));
    }

    #[test]
    fn test_empty_optional_equals_nil() {
        let empty = Value::Optional(Optional::none(ValueType::String));
        assert!(deep_equal(&empty, &Value::Nil));
        assert!(!deep_equal(&empty, &Value::from("")));
    }

    #[test]
    fn test_boxed_is_transparent() {
        assert!(deep_equal(&Value::boxed(Value::from("a")), &Value::from("a")));
    }
}
