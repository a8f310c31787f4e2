//! Indexing, slicing and range generation

use std::sync::Arc;

use super::{Expr, Runner};
use crate::error::{PathError, not_an_array};
use crate::located::Located;
use crate::resolver::{IndexSpec, evaluate_index, index_at};
use crate::scope::Scope;
use crate::value::{IntWidth, Sequence, Value, ValueType};

fn single(expr: &Expr, scope: &Scope) -> Result<i64, PathError> {
    match evaluate_index(&expr.run(scope))? {
        IndexSpec::Single(index) => Ok(index),
        IndexSpec::Many(_) => Err(PathError::UnknownIndexMode("sequence".to_string())),
    }
}

fn index_label(spec: &IndexSpec) -> String {
    match spec {
        IndexSpec::Single(index) => index.to_string(),
        IndexSpec::Many(indices) => {
            let joined: Vec<String> = indices.iter().map(i64::to_string).collect();
            joined.join(",")
        }
    }
}

/// Element (or elements) at an evaluated index
///
/// On a non-sequence only index `0` is accepted and selects the value
/// itself.
#[derive(Debug, Clone)]
pub struct Index {
    target: Expr,
    index: Expr,
}

impl Runner for Index {
    fn run(&self, scope: &Scope) -> Located {
        let target = propagate!(self.target.run(scope));
        let index = self.index.run(scope);
        let spec = match evaluate_index(&index) {
            Ok(spec) => spec,
            Err(error) => {
                let shown = index.raw().map_or_else(|| "?".to_string(), |v| v.to_string());
                return Located::invalid(format!("{}[{shown}]", target.path()), error);
            }
        };
        let raw = target.raw().unwrap_or_default();

        let Some(seq) = raw.as_sequence() else {
            return match spec {
                IndexSpec::Single(0) => {
                    let path = format!("{}[0]", target.path());
                    target.with_path(path)
                }
                _ => Located::invalid(
                    format!("{}[{}]", target.path(), index_label(&spec)),
                    not_an_array(&raw),
                ),
            };
        };

        match spec {
            IndexSpec::Single(index) => index_at(target.path(), seq, index),
            IndexSpec::Many(indices) => {
                let mut picked = Vec::with_capacity(indices.len());
                for index in &indices {
                    let found = propagate!(index_at(target.path(), seq, *index));
                    picked.extend(found.raw());
                }
                let path = format!("{}[{}]", target.path(), index_label(&IndexSpec::Many(indices)));
                Located::at(
                    path,
                    Value::Sequence(Sequence::new(seq.elem_type().clone(), picked)),
                )
            }
        }
    }
}

/// Sub-sequence `[start:end]`
///
/// Bounds default to `0` and the length; negative bounds count from the
/// end. After that `0 <= start <= end <= len` must hold.
#[derive(Debug, Clone)]
pub struct Range {
    source: Expr,
    start: Option<Expr>,
    end: Option<Expr>,
}

impl Runner for Range {
    fn run(&self, scope: &Scope) -> Located {
        let source = propagate!(self.source.run(scope));
        // Failures are reported at the bounds as written
        let failed_at = || {
            let shown = |expr: &Option<Expr>| {
                expr.as_ref().map_or_else(String::new, |expr| {
                    single(expr, scope).map_or_else(|_| "?".to_string(), |i| i.to_string())
                })
            };
            format!("{}[{}:{}]", source.path(), shown(&self.start), shown(&self.end))
        };
        let raw = source.raw().unwrap_or_default();
        let Some(seq) = raw.as_sequence() else {
            return Located::invalid(failed_at(), not_an_array(&raw));
        };
        let len = i64::try_from(seq.len()).unwrap_or(i64::MAX);

        let bound = |expr: &Option<Expr>, default: i64| -> Result<(i64, i64), PathError> {
            let requested = match expr {
                Some(expr) => single(expr, scope)?,
                None => default,
            };
            let normalized = if requested < 0 { len + requested } else { requested };
            Ok((requested, normalized))
        };

        let ((req_start, start), (req_end, end)) = match (bound(&self.start, 0), bound(&self.end, len)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(error), _) | (_, Err(error)) => return Located::invalid(failed_at(), error),
        };

        let out_of_range = |index| PathError::IndexOutOfRange {
            index,
            len: seq.len(),
        };
        if start < 0 || start > len {
            return Located::invalid(failed_at(), out_of_range(req_start));
        }
        if end < start || end > len {
            return Located::invalid(failed_at(), out_of_range(req_end));
        }

        // Both bounds are within 0..=len here.
        let (lo, hi) = (start as usize, end as usize);
        Located::at(
            format!("{}[{start}:{end}]", source.path()),
            Value::Sequence(Sequence::new(
                seq.elem_type().clone(),
                seq.items()[lo..hi].to_vec(),
            )),
        )
    }
}

/// Inclusive integer run `start..=end`
///
/// Empty when `start > end`; longer than the configured cap is `TooLarge`.
#[derive(Debug, Clone)]
pub struct SequenceGen {
    start: Expr,
    end: Expr,
}

impl Runner for SequenceGen {
    fn run(&self, scope: &Scope) -> Located {
        let path = scope.position().path().to_string();
        let (start, end) = match (single(&self.start, scope), single(&self.end, scope)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(error), _) | (_, Err(error)) => return Located::invalid(path, error),
        };
        generate(&path, start, end, scope.config().max_sequence_len)
    }
}

/// Inclusive run from `start` to `end`, capped at `limit` elements
#[must_use]
pub fn generate(path: &str, start: i64, end: i64, limit: usize) -> Located {
    let int = ValueType::Int(IntWidth::I64);
    if start > end {
        return Located::at(path, Value::Sequence(Sequence::empty(int)));
    }
    let len = u64::try_from(i128::from(end) - i128::from(start) + 1).unwrap_or(u64::MAX);
    if len > limit as u64 {
        tracing::warn!(
            target: "pathor::combinators",
            start,
            end,
            limit,
            "generated sequence exceeds limit"
        );
        return Located::invalid(path, PathError::TooLarge { len, limit });
    }
    let items = (start..=end).map(Value::i64).collect();
    Located::at(path, Value::Sequence(Sequence::new(int, items)))
}

/// Index into `target`
#[must_use]
pub fn index(target: Expr, index: Expr) -> Expr {
    Arc::new(Index { target, index })
}

/// Slice `source` between optional bounds
#[must_use]
pub fn slice(source: Expr, start: Option<Expr>, end: Option<Expr>) -> Expr {
    Arc::new(Range { source, start, end })
}

/// Integer run between two evaluated bounds
#[must_use]
pub fn sequence(start: Expr, end: Expr) -> Expr {
    Arc::new(SequenceGen { start, end })
}
