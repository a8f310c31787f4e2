//! Set algebra over sequences
//!
//! Operands that are not sequences count as one-element sets; nil counts
//! as the empty set. Element order follows the left operand, then the
//! right.

use std::sync::Arc;

use super::{Expr, Runner, position};
use crate::error::PathError;
use crate::located::Located;
use crate::scope::Scope;
use crate::value::{Sequence, Value};

fn members(located: &Located) -> Vec<Value> {
    let raw = located.raw().unwrap_or_default();
    match raw.deref_value() {
        None | Some(Value::Nil) => Vec::new(),
        Some(Value::Sequence(seq)) => seq.items().to_vec(),
        Some(other) => vec![other.clone()],
    }
}

fn dedup(items: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn collect(path: &str, items: Vec<Value>) -> Located {
    Located::at(path, Value::Sequence(Sequence::infer(items)))
}

/// Elements of either operand, without duplicates
#[must_use]
pub fn union_of(left: &Located, right: &Located) -> Located {
    for operand in [left, right] {
        if operand.is_invalid() {
            return operand.clone();
        }
    }
    let items = dedup(members(left).into_iter().chain(members(right)));
    collect(left.path(), items)
}

/// Elements of both operands, without duplicates
///
/// An empty intersection is `NoMatches`.
#[must_use]
pub fn intersection_of(left: &Located, right: &Located) -> Located {
    for operand in [left, right] {
        if operand.is_invalid() {
            return operand.clone();
        }
    }
    let other = members(right);
    let items = dedup(members(left).into_iter().filter(|item| other.contains(item)));
    if items.is_empty() {
        return Located::invalid(left.path(), PathError::NoMatches);
    }
    collect(left.path(), items)
}

/// Elements of the left operand followed by the right, duplicates kept
#[must_use]
pub fn append_of(left: &Located, right: &Located) -> Located {
    for operand in [left, right] {
        if operand.is_invalid() {
            return operand.clone();
        }
    }
    let mut items = members(left);
    items.extend(members(right));
    collect(left.path(), items)
}

macro_rules! set_runner {
    ($(#[$doc:meta])* $name:ident, $op:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            left: Expr,
            right: Expr,
        }

        impl $name {
            /// Combine `left` with `right`
            #[must_use]
            pub fn new(left: Expr, right: Expr) -> Self {
                Self { left, right }
            }

            /// Combine the pipeline value with `right`
            #[must_use]
            pub fn with_position(right: Expr) -> Self {
                Self::new(position(), right)
            }
        }

        impl Runner for $name {
            fn run(&self, scope: &Scope) -> Located {
                let left = propagate!(self.left.run(scope));
                let right = propagate!(self.right.run(scope));
                $op(&left, &right)
            }
        }
    };
}

set_runner!(
    /// Set union
    Union,
    union_of
);
set_runner!(
    /// Set intersection
    Intersection,
    intersection_of
);
set_runner!(
    /// Concatenation
    Append,
    append_of
);

/// Union of `left` and `right`
#[must_use]
pub fn union(left: Expr, right: Expr) -> Expr {
    Arc::new(Union::new(left, right))
}

/// Intersection of `left` and `right`
#[must_use]
pub fn intersection(left: Expr, right: Expr) -> Expr {
    Arc::new(Intersection::new(left, right))
}

/// `left` followed by `right`
#[must_use]
pub fn append(left: Expr, right: Expr) -> Expr {
    Arc::new(Append::new(left, right))
}
