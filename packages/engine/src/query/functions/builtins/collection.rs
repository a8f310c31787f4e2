//! `$first`, `$last`, `$distinct`, `$keys` and the set functions

use crate::combinators::collection::scan;
use crate::combinators::propagate;
use crate::combinators::sets::{append_of, intersection_of, union_of};
use crate::error::unsupported;
use crate::located::Located;
use crate::query::functions::Function;
use crate::value::{Sequence, Value, ValueType};

pub(super) fn first() -> Function {
    Function::new("first", 1, 1, |scope, args| scan(scope, &args[0], None, false))
}

pub(super) fn last() -> Function {
    Function::new("last", 1, 1, |scope, args| scan(scope, &args[0], None, true))
}

/// Elements without duplicates, first occurrence kept
pub(super) fn distinct() -> Function {
    Function::new("distinct", 1, 1, |_, args| {
        union_of(&args[0], &Located::constant(Value::Nil))
    })
}

/// Map keys or a record's visible field names
pub(super) fn keys() -> Function {
    Function::new("keys", 1, 1, |_, args| {
        let arg = propagate!(args[0].clone());
        let value = arg.raw().unwrap_or_default();
        let keys = match value.deref_value() {
            Some(Value::Map(map)) => Sequence::new(map.key_type().clone(), map.keys().cloned().collect()),
            Some(Value::Record(record)) => Sequence::new(
                ValueType::String,
                record
                    .visible_fields()
                    .into_iter()
                    .map(|(name, _)| Value::from(name))
                    .collect(),
            ),
            _ => return Located::invalid(arg.path(), unsupported(&value)),
        };
        Located::at(arg.path(), Value::Sequence(keys))
    })
}

pub(super) fn append() -> Function {
    Function::new("append", 2, 2, |_, args| append_of(&args[0], &args[1]))
}

pub(super) fn union() -> Function {
    Function::new("union", 2, 2, |_, args| union_of(&args[0], &args[1]))
}

pub(super) fn intersection() -> Function {
    Function::new("intersection", 2, 2, |_, args| intersection_of(&args[0], &args[1]))
}
