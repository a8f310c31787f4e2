//! Built-in function bodies

mod aggregate;
mod collection;
mod conversion;
mod predicates;

use super::Function;

/// Every built-in function
pub(super) fn all() -> Vec<Function> {
    vec![
        aggregate::count(),
        aggregate::sum(),
        aggregate::max(),
        aggregate::min(),
        conversion::string(),
        conversion::number(),
        conversion::boolean(),
        conversion::length(),
        predicates::exists(),
        predicates::not(),
        predicates::contains(),
        collection::first(),
        collection::last(),
        collection::distinct(),
        collection::keys(),
        collection::append(),
        collection::union(),
        collection::intersection(),
    ]
}
