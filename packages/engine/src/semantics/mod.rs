//! Truthiness and comparison
//!
//! Combinators never decide on their own what "true" or "less than" means;
//! they ask the `Semantics` carried by the scope. `StandardSemantics` is the
//! default collaborator.

mod standard;
mod truth;

use std::fmt;

pub use standard::StandardSemantics;
pub use truth::{CompareOp, Truth};

use crate::error::PathError;
use crate::located::Located;
use crate::value::Value;

/// Truthiness and comparison collaborator
pub trait Semantics: Send + Sync + fmt::Debug {
    /// Boolean interpretation of a value
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotTruthyAble` for values with no boolean meaning.
    fn truthy(&self, value: &Value) -> Result<bool, PathError>;

    /// Compare two values
    ///
    /// # Errors
    ///
    /// Returns `PathError::MatchFailed` when the operands cannot be ordered.
    fn compare(&self, left: &Value, op: CompareOp, right: &Value) -> Result<bool, PathError>;

    /// Three-state truth of a located value
    fn truth(&self, located: &Located) -> Truth {
        if let Some(error) = located.error() {
            return Truth::Failed(error.clone());
        }
        match located.raw() {
            Some(value) => self.truthy(&value).into(),
            None => Truth::False,
        }
    }
}
