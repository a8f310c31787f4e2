//! Fast-path navigation
//!
//! String-keyed maps and sequences are resolved directly. Anything else
//! takes one step through the general resolver and, when that succeeds,
//! continues on the fast path.

use super::{Located, Segment};
use crate::error::{PathError, not_found};
use crate::resolver;
use crate::value::{Value, ValueType};

pub(crate) fn find(path: &str, value: &Value, segment: &Segment) -> Located {
    match value.deref_value() {
        Some(Value::Map(map)) if map.key_type() == &ValueType::String => {
            let next = segment.extend(path);
            let key = segment.to_string();
            match map.get_str(&key) {
                Some(found) => Located::Fast {
                    path: next,
                    value: found.clone(),
                },
                None => Located::invalid(next, not_found(key, &value.value_type())),
            }
        }
        Some(Value::Sequence(seq)) => match segment.as_index() {
            Some(index) => {
                let next = Segment::Index(index).extend(path);
                match resolver::wrap_index(index, seq.len()) {
                    Some(pos) => Located::Fast {
                        path: next,
                        value: seq.items()[pos].clone(),
                    },
                    None => Located::invalid(
                        next,
                        PathError::IndexOutOfRange {
                            index,
                            len: seq.len(),
                        },
                    ),
                }
            }
            None => promote(resolver::resolve(path, value, segment)),
        },
        _ => promote(resolver::resolve(path, value, segment)),
    }
}

fn promote(found: Located) -> Located {
    match found {
        Located::Reflective { path, value } => Located::Fast { path, value },
        other => other,
    }
}
