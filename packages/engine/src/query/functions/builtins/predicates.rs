//! `$exists`, `$not`, `$contains`

use crate::combinators::collection::contains_value;
use crate::combinators::propagate;
use crate::located::Located;
use crate::query::functions::Function;

/// Whether the argument resolved; never invalid itself
pub(super) fn exists() -> Function {
    Function::new("exists", 1, 1, |_, args| {
        Located::constant_at(args[0].path(), !args[0].is_invalid())
    })
}

pub(super) fn not() -> Function {
    Function::new("not", 1, 1, |scope, args| {
        let arg = &args[0];
        match scope.semantics().truth(arg).negate().into_result() {
            Ok(b) => Located::constant_at(arg.path(), b),
            Err(error) => Located::invalid(arg.path(), error),
        }
    })
}

/// `$contains(collection, target)`: substring, element or key membership
pub(super) fn contains() -> Function {
    Function::new("contains", 2, 2, |_, args| {
        let collection = propagate!(args[0].clone());
        let target = propagate!(args[1].clone());
        let hit = match (collection.raw(), target.raw()) {
            (Some(c), Some(t)) => contains_value(&c, &t),
            _ => false,
        };
        Located::constant_at(collection.path(), hit)
    })
}
