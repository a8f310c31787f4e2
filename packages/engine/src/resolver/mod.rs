//! Single-step resolution
//!
//! `resolve` takes one segment from a value of any shape. The dispatch is
//! over the closed `Value` enum: optional and boxed slots unwrap, records
//! look up fields then methods, maps coerce the segment into their key type,
//! sequences either index or fan out, and zero-argument callables are
//! invoked and resolved into.

mod index;
mod invoke;
mod mapping;
mod record;
mod sequence;
mod unify;

pub use index::{IndexSpec, evaluate_index};
pub(crate) use sequence::{index_at, wrap_index};
pub(crate) use unify::{fan_out, unify_results};

use crate::error::{PathError, unsupported};
use crate::located::{Located, Segment, adapter};
use crate::value::Value;

/// Resolve `segment` against `value`, found at `path`
pub(crate) fn resolve(path: &str, value: &Value, segment: &Segment) -> Located {
    match value {
        Value::Boxed(inner) => resolve(path, inner, segment),
        Value::Optional(opt) => match opt.get() {
            Some(inner) => resolve(path, inner, segment),
            None => Located::invalid(segment.extend(path), PathError::NilElement),
        },
        Value::Nil => Located::invalid(segment.extend(path), PathError::NilElement),
        Value::Record(rec) => record::resolve(path, rec, segment),
        Value::Map(map) => mapping::resolve(path, map, segment),
        Value::Sequence(seq) => sequence::resolve(path, seq, segment),
        Value::Callable(callable) => invoke::resolve(path, callable, segment),
        Value::Navigable(object) => adapter::find(path, object.as_ref(), segment),
        scalar => Located::invalid(segment.extend(path), unsupported(scalar)),
    }
}
