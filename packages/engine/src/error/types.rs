//! Navigation and query error types
//!
//! `PathError` is the causal error carried by every invalid located value.
//! `QueryError` is produced by the query front end and carries a character
//! offset into the query text.

use thiserror::Error;

/// Causal error carried by an invalid located value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// A navigable object had nothing at the requested segment
    #[error("no such path")]
    NoSuchPath,

    /// Record or map has no member under the requested name
    #[error("`{name}` not found on {type_name}")]
    NotFound {
        /// Requested member name
        name: String,
        /// Type the lookup was made against
        type_name: String,
    },

    /// Path segment could not be converted to the map's key type
    #[error("cannot use `{key}` as a {key_type} map key")]
    BadKey {
        /// Segment text
        key: String,
        /// Declared key type
        key_type: String,
    },

    /// Navigation reached an empty optional or a nil value
    #[error("nil element")]
    NilElement,

    /// Value shape cannot be navigated, or a callable has the wrong shape
    #[error("unsupported element kind: {kind}")]
    UnsupportedElement {
        /// Kind of the offending value
        kind: String,
    },

    /// A function was invoked with arguments it cannot accept
    #[error("invalid evaluation function: {0}")]
    InvalidEvaluationFunction(String),

    /// A filter or map stage found nothing after succeeding structurally
    #[error("evaluation failed")]
    EvaluationFailed,

    /// A zero-argument method or navigable object reported an error
    #[error("call to `{name}` failed: {message}")]
    CallFailed {
        /// Callable or segment name
        name: String,
        /// Error reported by the callee
        message: String,
    },

    /// Index applied to something that is not a sequence
    #[error("cannot index into {type_name}: not an array")]
    IndexNotAnArray {
        /// Type of the indexed value
        type_name: String,
    },

    /// Index or slice bound outside of the sequence
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index, before wraparound
        index: i64,
        /// Sequence length
        len: usize,
    },

    /// Index value is not an integer and cannot be parsed as one
    #[error("invalid index value: {0}")]
    InvalidIndexValue(String),

    /// Index value has a shape that selects nothing meaningful
    #[error("unknown index mode for {0}")]
    UnknownIndexMode(String),

    /// Fan-out, scan or intersection produced no results
    #[error("no matches for query")]
    NoMatches,

    /// Operands cannot be compared with the requested operator
    #[error("cannot compare {left} {op} {right}")]
    MatchFailed {
        /// Left operand type
        left: String,
        /// Operator symbol
        op: String,
        /// Right operand type
        right: String,
    },

    /// Membership guard did not find its value
    #[error("value not in collection")]
    NotInCollection,

    /// Arithmetic operands are not both numeric
    #[error("type mismatch: {left} and {right}")]
    TypeMismatch {
        /// Left operand type
        left: String,
        /// Right operand type
        right: String,
    },

    /// Division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Modulo with a zero divisor
    #[error("modulo by zero")]
    ModuloByZero,

    /// Modulo operand does not convert cleanly to an integer
    #[error("{0} is not an integer")]
    NotIntegral(String),

    /// Generated sequence exceeds the configured cap
    #[error("sequence of {len} elements exceeds limit of {limit}")]
    TooLarge {
        /// Requested element count
        len: u64,
        /// Configured limit
        limit: usize,
    },

    /// Value has no boolean interpretation
    #[error("cannot determine truthiness of {0}")]
    NotTruthyAble(String),

    /// Lazy document failed to decode
    #[error("failed to decode {format}: {message}")]
    Decode {
        /// Document format
        format: &'static str,
        /// Decoder message
        message: String,
    },
}

/// Result type for navigation operations that leave the located-value world
pub type PathResult<T> = Result<T, PathError>;

/// Query text could not be parsed or compiled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid query '{expression}': {reason} at offset {offset}")]
pub struct QueryError {
    /// Full query text
    pub expression: String,
    /// What went wrong
    pub reason: String,
    /// Character offset at which the problem was detected
    pub offset: usize,
}

/// Result type for query compilation
pub type QueryResult<T> = Result<T, QueryError>;

impl QueryError {
    /// Create a query error
    #[must_use]
    pub fn new(expression: impl Into<String>, reason: impl Into<String>, offset: usize) -> Self {
        Self {
            expression: expression.into(),
            reason: reason.into(),
            offset,
        }
    }
}
