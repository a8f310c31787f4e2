//! Collection combinators: filter, map, membership, quantifiers, scans

use std::sync::Arc;

use super::{Expr, Runner, position};
use crate::error::PathError;
use crate::located::Located;
use crate::resolver::{fan_out, unify_results};
use crate::scope::Scope;
use crate::semantics::Truth;
use crate::value::{Value, deep_equal};

/// Elements of a located value; a non-sequence counts as one element
///
/// # Errors
///
/// `NilElement` when the value is nil or an empty optional.
pub fn elements(located: &Located) -> Result<Vec<Value>, PathError> {
    let raw = located.raw().unwrap_or_default();
    match raw.deref_value() {
        None | Some(Value::Nil) => Err(PathError::NilElement),
        Some(Value::Sequence(seq)) => Ok(seq.items().to_vec()),
        Some(other) => Ok(vec![other.clone()]),
    }
}

fn element_at(source: &Located, index: usize, item: &Value) -> Located {
    if source.is_slice() {
        Located::at(format!("{}[{index}]", source.path()), item.clone())
    } else {
        source.clone()
    }
}

/// Whether `target` occurs in `collection`
///
/// Strings test for a substring, sequences for an element (every element
/// when `target` is itself a sequence), maps for a key. Anything else falls
/// back to equality.
#[must_use]
pub fn contains_value(collection: &Value, target: &Value) -> bool {
    match (collection.deref_value(), target.deref_value()) {
        (Some(Value::String(haystack)), Some(Value::String(needle))) => {
            haystack.contains(needle.as_str())
        }
        (Some(Value::Sequence(seq)), Some(Value::Sequence(wanted))) => {
            wanted.iter().all(|w| seq.contains(w))
        }
        (Some(Value::Sequence(seq)), _) => seq.contains(target),
        (Some(Value::Map(map)), _) => map.keys().any(|k| deep_equal(k, target)),
        _ => deep_equal(collection, target),
    }
}

/// Elements for which `predicate` holds
///
/// The predicate runs with each element as context. Survivors are unified
/// like a fan-out; an empty result is `EvaluationFailed`.
#[derive(Debug, Clone)]
pub struct Filter {
    source: Expr,
    predicate: Expr,
}

impl Filter {
    /// Filter `source` by `predicate`
    #[must_use]
    pub fn new(source: Expr, predicate: Expr) -> Self {
        Self { source, predicate }
    }
}

impl Runner for Filter {
    fn run(&self, scope: &Scope) -> Located {
        let source = propagate!(self.source.run(scope));
        let items = match elements(&source) {
            Ok(items) => items,
            Err(error) => return Located::invalid(source.path(), error),
        };

        let mut kept = Vec::new();
        for (i, item) in items.iter().enumerate() {
            let elem = element_at(&source, i, item);
            let verdict = self.predicate.run(&scope.nest(elem));
            if scope.semantics().truth(&verdict).is_true() {
                kept.push(item.clone());
            }
        }

        tracing::trace!(
            target: "pathor::combinators",
            path = source.path(),
            candidates = items.len(),
            kept = kept.len(),
            "filter"
        );

        if !source.is_slice() {
            if kept.is_empty() {
                return Located::invalid(format!("{}[?]", source.path()), PathError::EvaluationFailed);
            }
            return source;
        }
        unify_results(format!("{}[?]", source.path()), kept, true)
    }
}

/// `mapper` applied to every element
#[derive(Debug, Clone)]
pub struct Map {
    source: Expr,
    mapper: Expr,
}

impl Runner for Map {
    fn run(&self, scope: &Scope) -> Located {
        let source = propagate!(self.source.run(scope));
        if !source.is_slice() {
            return self.mapper.run(&scope.nest(source));
        }
        let items = match elements(&source) {
            Ok(items) => items,
            Err(error) => return Located::invalid(source.path(), error),
        };
        fan_out(source.path(), &items, true, |elem_path, item| {
            self.mapper.run(&scope.nest(Located::at(elem_path, item.clone())))
        })
    }
}

/// Boolean membership test
#[derive(Debug, Clone)]
pub struct Contains {
    collection: Expr,
    target: Expr,
}

impl Runner for Contains {
    fn run(&self, scope: &Scope) -> Located {
        let collection = propagate!(self.collection.run(scope));
        let target = propagate!(self.target.run(scope));
        let found = contains_value(
            &collection.raw().unwrap_or_default(),
            &target.raw().unwrap_or_default(),
        );
        Located::constant_at(target.path(), found)
    }
}

/// Membership guard
///
/// Passes the pipeline value through when `needle` is in `collection`,
/// otherwise fails with `NotInCollection`.
#[derive(Debug, Clone)]
pub struct In {
    needle: Expr,
    collection: Expr,
}

impl Runner for In {
    fn run(&self, scope: &Scope) -> Located {
        let needle = propagate!(self.needle.run(scope));
        let collection = propagate!(self.collection.run(scope));
        if contains_value(
            &collection.raw().unwrap_or_default(),
            &needle.raw().unwrap_or_default(),
        ) {
            scope.position().clone()
        } else {
            Located::invalid(scope.position().path(), PathError::NotInCollection)
        }
    }
}

/// Whether `elem` qualifies
///
/// A predicate that does not resolve is a miss, as in [`Filter`]. A resolved
/// value with no boolean meaning fails at the element's path.
fn holds(scope: &Scope, predicate: Option<&Expr>, elem: &Located) -> Result<bool, Located> {
    let verdict = match predicate {
        Some(predicate) => predicate.run(&scope.nest(elem.clone())),
        None => elem.clone(),
    };
    if verdict.is_invalid() {
        return Ok(false);
    }
    match scope.semantics().truth(&verdict) {
        Truth::True => Ok(true),
        Truth::False => Ok(false),
        Truth::Failed(error) => Err(Located::invalid(elem.path(), error)),
    }
}

/// First qualifying element in scan order, or the failure that stopped the scan
fn first_hit(
    scope: &Scope,
    source: &Located,
    items: &[Value],
    predicate: Option<&Expr>,
    from_end: bool,
) -> Result<Option<Located>, Located> {
    let order: Vec<usize> = if from_end {
        (0..items.len()).rev().collect()
    } else {
        (0..items.len()).collect()
    };
    for i in order {
        let elem = element_at(source, i, &items[i]);
        if holds(scope, predicate, &elem)? {
            return Ok(Some(elem));
        }
    }
    Ok(None)
}

/// Quantifier over elements
///
/// NOTE: the result is `true` only when *no* element satisfies the
/// predicate (and `false` as soon as one does). Existing queries depend on
/// this, so it is kept rather than turned into a universal quantifier.
#[derive(Debug, Clone)]
pub struct Every {
    source: Expr,
    predicate: Option<Expr>,
}

impl Runner for Every {
    fn run(&self, scope: &Scope) -> Located {
        let source = propagate!(self.source.run(scope));
        let items = match elements(&source) {
            Ok(items) => items,
            Err(error) => return Located::invalid(source.path(), error),
        };
        match first_hit(scope, &source, &items, self.predicate.as_ref(), false) {
            Ok(hit) => Located::constant_at(source.path(), hit.is_none()),
            Err(failed) => failed,
        }
    }
}

/// `true` on the first element satisfying the predicate
#[derive(Debug, Clone)]
pub struct Any {
    source: Expr,
    predicate: Option<Expr>,
}

impl Runner for Any {
    fn run(&self, scope: &Scope) -> Located {
        let source = propagate!(self.source.run(scope));
        let items = match elements(&source) {
            Ok(items) => items,
            Err(error) => return Located::invalid(source.path(), error),
        };
        match first_hit(scope, &source, &items, self.predicate.as_ref(), false) {
            Ok(hit) => Located::constant_at(source.path(), hit.is_some()),
            Err(failed) => failed,
        }
    }
}

/// First (or, scanning backwards, last) element satisfying `predicate`
///
/// Without a predicate every element qualifies.
#[must_use]
pub fn scan(scope: &Scope, source: &Located, predicate: Option<&Expr>, from_end: bool) -> Located {
    if source.is_invalid() {
        return source.clone();
    }
    let items = match elements(source) {
        Ok(items) => items,
        Err(error) => return Located::invalid(source.path(), error),
    };
    if predicate.is_none() {
        let picked = if from_end {
            items.len().checked_sub(1)
        } else {
            (!items.is_empty()).then_some(0)
        };
        return match picked {
            Some(i) => element_at(source, i, &items[i]),
            None => Located::invalid(source.path(), PathError::NoMatches),
        };
    }
    match first_hit(scope, source, &items, predicate, from_end) {
        Ok(Some(elem)) => elem,
        Ok(None) => Located::invalid(source.path(), PathError::NoMatches),
        Err(failed) => failed,
    }
}

/// First qualifying element
#[derive(Debug, Clone)]
pub struct First {
    source: Expr,
    predicate: Option<Expr>,
}

impl Runner for First {
    fn run(&self, scope: &Scope) -> Located {
        scan(scope, &self.source.run(scope), self.predicate.as_ref(), false)
    }
}

/// Last qualifying element
#[derive(Debug, Clone)]
pub struct Last {
    source: Expr,
    predicate: Option<Expr>,
}

impl Runner for Last {
    fn run(&self, scope: &Scope) -> Located {
        scan(scope, &self.source.run(scope), self.predicate.as_ref(), true)
    }
}

/// Filter `source` by `predicate`
#[must_use]
pub fn filter(source: Expr, predicate: Expr) -> Expr {
    Arc::new(Filter::new(source, predicate))
}

/// Map `mapper` over `source`
#[must_use]
pub fn map(source: Expr, mapper: Expr) -> Expr {
    Arc::new(Map { source, mapper })
}

/// Boolean membership of `target` in `collection`
#[must_use]
pub fn contains(collection: Expr, target: Expr) -> Expr {
    Arc::new(Contains { collection, target })
}

/// Guard passing the pipeline value when `needle` is in `collection`
#[must_use]
pub fn is_in(needle: Expr, collection: Expr) -> Expr {
    Arc::new(In { needle, collection })
}

/// Quantifier over the pipeline value; see [`Every`] for its semantics
#[must_use]
pub fn every(predicate: Option<Expr>) -> Expr {
    Arc::new(Every {
        source: position(),
        predicate,
    })
}

/// `true` when some element of the pipeline value qualifies
#[must_use]
pub fn any(predicate: Option<Expr>) -> Expr {
    Arc::new(Any {
        source: position(),
        predicate,
    })
}

/// First qualifying element of `source`
#[must_use]
pub fn first(source: Expr, predicate: Option<Expr>) -> Expr {
    Arc::new(First { source, predicate })
}

/// Last qualifying element of `source`
#[must_use]
pub fn last(source: Expr, predicate: Option<Expr>) -> Expr {
    Arc::new(Last { source, predicate })
}
