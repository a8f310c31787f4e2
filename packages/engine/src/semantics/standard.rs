//! Default truthiness and comparison rules

use std::cmp::Ordering;

use super::{CompareOp, Semantics};
use crate::error::PathError;
use crate::value::{Value, deep_equal};

/// Default semantics
///
/// Non-zero numbers, non-empty strings and collections, and `true` are
/// truthy. Numbers compare by value across widths, strings compare
/// lexicographically, and everything else supports only equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSemantics;

impl Semantics for StandardSemantics {
    fn truthy(&self, value: &Value) -> Result<bool, PathError> {
        let Some(value) = value.deref_value() else {
            return Ok(false);
        };
        match value {
            Value::Nil => Ok(false),
            Value::Bool(b) => Ok(*b),
            Value::Int(v, _) => Ok(*v != 0),
            Value::Uint(v, _) => Ok(*v != 0),
            Value::Float(v, _) => Ok(*v != 0.0),
            Value::Complex(c, _) => Ok(c.re != 0.0 || c.im != 0.0),
            Value::String(s) => Ok(!s.is_empty()),
            Value::Sequence(seq) => Ok(!seq.is_empty()),
            Value::Map(map) => Ok(!map.is_empty()),
            other => Err(PathError::NotTruthyAble(other.value_type().to_string())),
        }
    }

    fn compare(&self, left: &Value, op: CompareOp, right: &Value) -> Result<bool, PathError> {
        let l = left.deref_value().unwrap_or(&Value::Nil);
        let r = right.deref_value().unwrap_or(&Value::Nil);

        if let Some(ordering) = order(l, r) {
            return Ok(op.apply(ordering));
        }

        if op.is_ordering() {
            return Err(PathError::MatchFailed {
                left: l.value_type().to_string(),
                op: op.symbol().to_string(),
                right: r.value_type().to_string(),
            });
        }

        let equal = deep_equal(l, r);
        Ok(if op == CompareOp::Eq { equal } else { !equal })
    }
}

/// Total order for the pairs that have one
fn order(l: &Value, r: &Value) -> Option<Ordering> {
    match (l, r) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Int(..) | Value::Uint(..), Value::Int(..) | Value::Uint(..)) => {
            Some(wide_int(l)?.cmp(&wide_int(r)?))
        }
        (
            Value::Int(..) | Value::Uint(..) | Value::Float(..),
            Value::Int(..) | Value::Uint(..) | Value::Float(..),
        ) => l.as_f64()?.partial_cmp(&r.as_f64()?),
        _ => None,
    }
}

fn wide_int(value: &Value) -> Option<i128> {
    match value {
        Value::Int(v, _) => Some(i128::from(*v)),
        Value::Uint(v, _) => Some(i128::from(*v)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Record, UintWidth};

    #[test]
    fn test_truthiness() {
        let s = StandardSemantics;
        assert_eq!(s.truthy(&Value::from(0)), Ok(false));
        assert_eq!(s.truthy(&Value::from(0.5)), Ok(true));
        assert_eq!(s.truthy(&Value::from("")), Ok(false));
        assert_eq!(s.truthy(&Value::from(vec![1])), Ok(true));
        assert_eq!(s.truthy(&Value::Nil), Ok(false));
        assert!(matches!(
            s.truthy(&Value::from(Record::builder("R").build())),
            Err(PathError::NotTruthyAble(_))
        ));
    }

    #[test]
    fn test_numeric_comparison_across_widths() {
        let s = StandardSemantics;
        let big = Value::Uint(u64::MAX, UintWidth::U64);
        assert_eq!(s.compare(&big, CompareOp::Greater, &Value::from(-1)), Ok(true));
        assert_eq!(s.compare(&Value::from(2_u8), CompareOp::Eq, &Value::from(2.0)), Ok(true));
        assert_eq!(s.compare(&Value::from(1.5), CompareOp::LessEq, &Value::from(2)), Ok(true));
    }

    #[test]
    fn test_mixed_kinds() {
        let s = StandardSemantics;
        assert_eq!(s.compare(&Value::from("1"), CompareOp::Eq, &Value::from(1)), Ok(false));
        assert_eq!(s.compare(&Value::from("1"), CompareOp::NotEq, &Value::from(1)), Ok(true));
        assert!(matches!(
            s.compare(&Value::from(true), CompareOp::Less, &Value::from(1)),
            Err(PathError::MatchFailed { .. })
        ));
    }
}
