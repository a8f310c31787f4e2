//! Fan-out and result unification
//!
//! When a segment is applied to every element of a sequence, failed element
//! results are dropped and the survivors are gathered into a new sequence.
//! Its element type is the single type all survivors share, or else the
//! narrowest container widening every survivor fits into, or else `Any`.

use crate::error::PathError;
use crate::located::Located;
use crate::value::{Sequence, Value, ValueType, distinct};

/// Apply `step` to every element and unify the survivors
///
/// Elements are presented at `path[*]`. `staged` marks a filter or map
/// stage, which reports an empty result as `EvaluationFailed` rather than
/// `NoMatches`.
pub(crate) fn fan_out<F>(path: &str, items: &[Value], staged: bool, step: F) -> Located
where
    F: Fn(&str, &Value) -> Located,
{
    let elem_path = format!("{path}[*]");
    let mut result_path: Option<String> = None;
    let mut survivors = Vec::with_capacity(items.len());

    for item in items {
        let found = step(&elem_path, item);
        if result_path.is_none() {
            result_path = Some(found.path().to_string());
        }
        if let Some(value) = found.raw() {
            survivors.push(value);
        }
    }

    tracing::trace!(
        target: "pathor::resolve",
        path = %elem_path,
        elements = items.len(),
        survivors = survivors.len(),
        "fan-out"
    );

    unify_results(result_path.unwrap_or(elem_path), survivors, staged)
}

/// Gather values into one sequence typed by the unification rule
pub(crate) fn unify_results(path: String, values: Vec<Value>, staged: bool) -> Located {
    if values.is_empty() {
        let error = if staged {
            PathError::EvaluationFailed
        } else {
            PathError::NoMatches
        };
        return Located::invalid(path, error);
    }

    let values: Vec<Value> = values
        .into_iter()
        .map(|value| match value {
            Value::Boxed(inner) => *inner,
            other => other,
        })
        .collect();

    let types = distinct(values.iter().map(Value::value_type));
    let elem = match types.as_slice() {
        [only] => only.clone(),
        several => {
            let widened = ValueType::common_supertype(several);
            tracing::debug!(
                target: "pathor::resolve",
                path = %path,
                candidates = several.len(),
                unified = %widened,
                "heterogeneous fan-out"
            );
            widened
        }
    };

    Located::at(path, Value::Sequence(Sequence::new(elem, values)))
}
