//! Navigation through user navigable objects

use super::{Located, Segment};
use crate::error::PathError;
use crate::value::{Navigable, Value};

pub(crate) fn find(path: &str, object: &dyn Navigable, segment: &Segment) -> Located {
    let text = segment.to_string();
    let next = object
        .format_path(path, &text)
        .unwrap_or_else(|| segment.extend(path));

    match object.get(&text) {
        Ok(Some(Value::Navigable(inner))) => Located::Adapter {
            path: next,
            object: inner,
        },
        Ok(Some(value)) => Located::at(next, value),
        Ok(None) => Located::invalid(next, PathError::NoSuchPath),
        Err(e) => Located::invalid(
            next,
            PathError::CallFailed {
                name: text,
                message: e.to_string(),
            },
        ),
    }
}
