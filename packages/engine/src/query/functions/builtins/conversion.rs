//! `$string`, `$number`, `$boolean`, `$length`

use crate::combinators::propagate;
use crate::combinators::strings::text_of;
use crate::error::PathError;
use crate::located::Located;
use crate::query::functions::Function;
use crate::value::Value;

fn mismatch(value: &Value, wanted: &str) -> PathError {
    PathError::TypeMismatch {
        left: value.value_type().to_string(),
        right: wanted.to_string(),
    }
}

/// Canonical text form
pub(super) fn string() -> Function {
    Function::new("string", 1, 1, |_, args| {
        let arg = propagate!(args[0].clone());
        Located::at(arg.path(), Value::String(text_of(&arg)))
    })
}

/// Numbers pass through as `f64`; strings are parsed; booleans map to 1 and 0
pub(super) fn number() -> Function {
    Function::new("number", 1, 1, |_, args| {
        let arg = propagate!(args[0].clone());
        let value = arg.raw().unwrap_or_default();
        let parsed = match value.deref_value() {
            Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
            Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| mismatch(&value, "number")),
            _ => value.as_f64().ok_or_else(|| mismatch(&value, "number")),
        };
        match parsed {
            Ok(n) => Located::at(arg.path(), Value::f64(n)),
            Err(error) => Located::invalid(arg.path(), error),
        }
    })
}

/// Truthiness under the scope's semantics, as a constant
pub(super) fn boolean() -> Function {
    Function::new("boolean", 1, 1, |scope, args| {
        let arg = &args[0];
        match scope.semantics().truth(arg).into_result() {
            Ok(b) => Located::constant_at(arg.path(), b),
            Err(error) => Located::invalid(arg.path(), error),
        }
    })
}

/// Character count of a string
pub(super) fn length() -> Function {
    Function::new("length", 1, 1, |_, args| {
        let arg = propagate!(args[0].clone());
        let value = arg.raw().unwrap_or_default();
        match value.as_str() {
            Some(s) => Located::at(
                arg.path(),
                Value::i64(i64::try_from(s.chars().count()).unwrap_or(i64::MAX)),
            ),
            None => Located::invalid(arg.path(), mismatch(&value, "string")),
        }
    })
}
