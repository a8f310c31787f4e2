//! Index evaluation shared by indexing, slicing and range generation

use crate::error::PathError;
use crate::located::Located;
use crate::value::Value;

/// What an index expression selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSpec {
    /// One position
    Single(i64),
    /// Several positions, in order
    Many(Vec<i64>),
}

/// Interpret an evaluated index expression
///
/// Numbers convert when integral, numeric strings parse, and a sequence of
/// such values selects several positions.
///
/// # Errors
///
/// Returns the operand's own error when it is invalid,
/// `InvalidIndexValue` for values that look like an index but are not one,
/// and `UnknownIndexMode` for shapes that select nothing.
pub fn evaluate_index(index: &Located) -> Result<IndexSpec, PathError> {
    if let Some(error) = index.error() {
        return Err(error.clone());
    }
    let raw = index.raw().unwrap_or_default();
    match raw.deref_value() {
        Some(Value::Sequence(seq)) => seq
            .iter()
            .map(single_index)
            .collect::<Result<Vec<_>, _>>()
            .map(IndexSpec::Many),
        Some(other) => single_index(other).map(IndexSpec::Single),
        None => Err(PathError::InvalidIndexValue("nil".to_string())),
    }
}

fn single_index(value: &Value) -> Result<i64, PathError> {
    let Some(value) = value.deref_value() else {
        return Err(PathError::InvalidIndexValue("nil".to_string()));
    };
    match value {
        Value::Int(..) | Value::Uint(..) | Value::Float(..) => value
            .as_i64()
            .ok_or_else(|| PathError::InvalidIndexValue(value.to_string())),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| PathError::InvalidIndexValue(text.clone())),
        Value::Nil => Err(PathError::InvalidIndexValue("nil".to_string())),
        Value::Complex(..) => Err(PathError::InvalidIndexValue(value.to_string())),
        other => Err(PathError::UnknownIndexMode(other.value_type().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(value: impl Into<Value>) -> Result<IndexSpec, PathError> {
        evaluate_index(&Located::constant(value))
    }

    #[test]
    fn test_numbers_and_strings() {
        assert_eq!(eval(2_u8), Ok(IndexSpec::Single(2)));
        assert_eq!(eval(-1.0), Ok(IndexSpec::Single(-1)));
        assert_eq!(eval(" 3 "), Ok(IndexSpec::Single(3)));
        assert!(matches!(eval(1.5), Err(PathError::InvalidIndexValue(_))));
        assert!(matches!(eval("x"), Err(PathError::InvalidIndexValue(_))));
    }

    #[test]
    fn test_sequences_select_many() {
        assert_eq!(eval(vec![0, 2]), Ok(IndexSpec::Many(vec![0, 2])));
    }

    #[test]
    fn test_other_shapes_are_unknown() {
        assert!(matches!(eval(true), Err(PathError::UnknownIndexMode(_))));
    }

    #[test]
    fn test_invalid_operand_propagates() {
        let failed = Located::invalid("i", PathError::NoMatches);
        assert_eq!(evaluate_index(&failed), Err(PathError::NoMatches));
    }
}
