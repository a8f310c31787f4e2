//! Sequence indexing and fan-out

use super::{resolve as resolve_value, unify::fan_out};
use crate::error::PathError;
use crate::located::{Located, Segment};
use crate::value::Sequence;

pub(super) fn resolve(path: &str, seq: &Sequence, segment: &Segment) -> Located {
    match segment.as_index() {
        Some(index) => index_at(path, seq, index),
        None => fan_out(path, seq.items(), false, |elem_path, item| {
            resolve_value(elem_path, item, segment)
        }),
    }
}

/// Position for `index` in a sequence of `len`, counting negatives from
/// the end
pub(crate) fn wrap_index(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let pos = if index < 0 { len + index } else { index };
    if (0..len).contains(&pos) {
        usize::try_from(pos).ok()
    } else {
        None
    }
}

/// Element at `index`, with the requested index in the breadcrumb
pub(crate) fn index_at(path: &str, seq: &Sequence, index: i64) -> Located {
    let next = Segment::Index(index).extend(path);
    match wrap_index(index, seq.len()) {
        Some(pos) => Located::at(next, seq.items()[pos].clone()),
        None => Located::invalid(
            next,
            PathError::IndexOutOfRange {
                index,
                len: seq.len(),
            },
        ),
    }
}
