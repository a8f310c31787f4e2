//! Error constructor helpers
//!
//! Factory functions shared by the resolver, combinators and query front end.

use super::types::{PathError, QueryError};
use crate::value::{Value, ValueType};

/// Creates an invalid query error
///
/// # Arguments
/// * `expression` - The query text
/// * `reason` - Why the text was rejected
/// * `offset` - Character offset of the problem
///
/// # Examples
/// ```
/// use pathor_engine::error::invalid_query_error;
///
/// let error = invalid_query_error("Children[Name=", "unterminated filter", 14);
/// assert_eq!(error.offset, 14);
/// ```
#[must_use]
pub fn invalid_query_error(
    expression: impl Into<String>,
    reason: impl Into<String>,
    offset: usize,
) -> QueryError {
    QueryError::new(expression, reason, offset)
}

/// Member lookup failed on a typed value
#[must_use]
pub fn not_found(name: impl Into<String>, ty: &ValueType) -> PathError {
    PathError::NotFound {
        name: name.into(),
        type_name: ty.to_string(),
    }
}

/// Value of this shape cannot be navigated
#[must_use]
pub fn unsupported(value: &Value) -> PathError {
    PathError::UnsupportedElement {
        kind: value.value_type().to_string(),
    }
}

/// Arithmetic operands disagree
#[must_use]
pub fn type_mismatch(left: &Value, right: &Value) -> PathError {
    PathError::TypeMismatch {
        left: left.value_type().to_string(),
        right: right.value_type().to_string(),
    }
}

/// Index applied to a non-sequence
#[must_use]
pub fn not_an_array(value: &Value) -> PathError {
    PathError::IndexNotAnArray {
        type_name: value.value_type().to_string(),
    }
}
