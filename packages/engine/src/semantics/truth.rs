//! Three-state truth and comparison operators

use std::fmt;

use crate::error::PathError;

/// Outcome of a boolean decision
///
/// `Failed` keeps the reason a decision could not be made apart from a
/// plain `False`.
#[derive(Debug, Clone, PartialEq)]
pub enum Truth {
    /// Decision holds
    True,
    /// Decision does not hold
    False,
    /// Decision could not be made
    Failed(PathError),
}

impl Truth {
    /// `True` or `False`
    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        if value { Truth::True } else { Truth::False }
    }

    /// Whether the decision holds
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Truth::True)
    }

    /// Negate, keeping failures
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Truth::True => Truth::False,
            Truth::False => Truth::True,
            failed @ Truth::Failed(_) => failed,
        }
    }

    /// Convert to a result
    ///
    /// # Errors
    ///
    /// Returns the failure reason for `Truth::Failed`.
    pub fn into_result(self) -> Result<bool, PathError> {
        match self {
            Truth::True => Ok(true),
            Truth::False => Ok(false),
            Truth::Failed(error) => Err(error),
        }
    }
}

impl From<Result<bool, PathError>> for Truth {
    fn from(result: Result<bool, PathError>) -> Self {
        match result {
            Ok(value) => Truth::from_bool(value),
            Err(error) => Truth::Failed(error),
        }
    }
}

/// Comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEq,
    /// `<=`
    LessEq,
}

impl CompareOp {
    /// Query-language symbol
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
            CompareOp::Greater => ">",
            CompareOp::Less => "<",
            CompareOp::GreaterEq => ">=",
            CompareOp::LessEq => "<=",
        }
    }

    /// Whether this operator needs an ordering rather than equality
    #[must_use]
    pub fn is_ordering(self) -> bool {
        !matches!(self, CompareOp::Eq | CompareOp::NotEq)
    }

    pub(crate) fn apply(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering;
        match self {
            CompareOp::Eq => ordering == Ordering::Equal,
            CompareOp::NotEq => ordering != Ordering::Equal,
            CompareOp::Greater => ordering == Ordering::Greater,
            CompareOp::Less => ordering == Ordering::Less,
            CompareOp::GreaterEq => ordering != Ordering::Less,
            CompareOp::LessEq => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
