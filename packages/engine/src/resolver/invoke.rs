use super::resolve as resolve_value;
use crate::error::PathError;
use crate::located::{Located, Segment};
use crate::value::Callable;

/// Invoke a zero-argument callable and resolve `segment` into its result
pub(super) fn resolve(path: &str, callable: &Callable, segment: &Segment) -> Located {
    if !callable.is_invocable() {
        return Located::invalid(
            segment.extend(path),
            PathError::UnsupportedElement {
                kind: callable.signature(),
            },
        );
    }
    match callable.invoke() {
        Ok(result) => resolve_value(path, &result, segment),
        Err(message) => Located::invalid(
            segment.extend(path),
            PathError::CallFailed {
                name: callable.name().to_string(),
                message,
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Record, Returns, Value};

    #[test]
    fn test_result_is_navigated() {
        let callable = Callable::new("make", || {
            Value::from(Record::builder("Made").field("X", 5).build())
        });
        let found = resolve("root", &callable, &Segment::from("X"));
        assert_eq!(found.path(), "root.X");
        assert_eq!(found.raw(), Some(Value::from(5)));
    }

    #[test]
    fn test_wrong_shape_is_unsupported() {
        let callable = Callable::with_signature("two", 2, Returns::Value, || Ok(Value::Nil));
        let found = resolve("", &callable, &Segment::from("X"));
        assert!(matches!(
            found.error(),
            Some(PathError::UnsupportedElement { .. })
        ));
    }
}
