//! `$count`, `$sum`, `$max`, `$min`

use crate::combinators::arithmetic::{ArithOp, apply};
use crate::combinators::collection::elements;
use crate::combinators::propagate;
use crate::error::PathError;
use crate::located::Located;
use crate::query::functions::Function;
use crate::scope::Scope;
use crate::semantics::CompareOp;
use crate::value::Value;

/// Number of elements; nil counts zero, a scalar counts one
pub(super) fn count() -> Function {
    Function::new("count", 1, 1, |_, args| {
        let arg = propagate!(args[0].clone());
        let n = elements(&arg).map_or(0, |items| items.len());
        Located::at(arg.path(), Value::i64(i64::try_from(n).unwrap_or(i64::MAX)))
    })
}

/// Sum of numeric elements; an empty sum is 0
pub(super) fn sum() -> Function {
    Function::new("sum", 1, 1, |_, args| {
        let arg = propagate!(args[0].clone());
        let items = elements(&arg).unwrap_or_default();
        let mut total = Value::i64(0);
        for item in &items {
            total = match apply(ArithOp::Add, &total, item) {
                Ok(value) => value,
                Err(error) => return Located::invalid(arg.path(), error),
            };
        }
        Located::at(arg.path(), total)
    })
}

pub(super) fn max() -> Function {
    Function::new("max", 1, 1, |scope, args| {
        extreme(scope, &args[0], CompareOp::Greater)
    })
}

pub(super) fn min() -> Function {
    Function::new("min", 1, 1, |scope, args| extreme(scope, &args[0], CompareOp::Less))
}

/// Element that beats every other under `op`, keeping its own width
fn extreme(scope: &Scope, arg: &Located, op: CompareOp) -> Located {
    let arg = propagate!(arg.clone());
    let items = match elements(&arg) {
        Ok(items) => items,
        Err(error) => return Located::invalid(arg.path(), error),
    };
    let mut best: Option<Value> = None;
    for item in items {
        if !item.is_numeric() {
            return Located::invalid(
                arg.path(),
                PathError::TypeMismatch {
                    left: item.value_type().to_string(),
                    right: "number".to_string(),
                },
            );
        }
        best = match best {
            None => Some(item),
            Some(current) => match scope.semantics().compare(&item, op, &current) {
                Ok(true) => Some(item),
                Ok(false) => Some(current),
                Err(error) => return Located::invalid(arg.path(), error),
            },
        };
    }
    match best {
        Some(value) => Located::at(arg.path(), value),
        None => Located::invalid(arg.path(), PathError::NoMatches),
    }
}
