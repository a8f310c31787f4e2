use crate::error::{PathError, not_found};
use crate::located::{Located, Segment};
use crate::value::{Record, ValueType};

/// Exported field, else exported zero-argument method
pub(super) fn resolve(path: &str, record: &Record, segment: &Segment) -> Located {
    let name = segment.to_string();
    let next = segment.extend(path);

    if let Some(field) = record.field(&name).filter(|f| f.is_exported()) {
        return Located::at(next, field.value().clone());
    }

    match record.method(&name) {
        Some(method) if method.is_exported() && method.callable().is_invocable() => {
            match method.callable().invoke() {
                Ok(value) => Located::at(next, value),
                Err(message) => Located::invalid(next, PathError::CallFailed { name, message }),
            }
        }
        _ => {
            let ty = ValueType::Record(record.type_name().to_string());
            Located::invalid(next, not_found(name, &ty))
        }
    }
}
