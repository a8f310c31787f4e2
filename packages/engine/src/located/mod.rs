//! Located values
//!
//! A `Located` pairs a value with the breadcrumb that led to it. Navigation
//! never fails loudly: a step that cannot be taken yields an invalid located
//! value, and every later step from there stays invalid while the path keeps
//! growing.

pub(crate) mod adapter;
mod failure;
mod fast;
mod lazy;
mod segment;

use std::sync::Arc;

pub use failure::Failure;
pub use lazy::LazyDocument;
pub use segment::Segment;

use crate::error::{PathError, PathResult};
use crate::resolver;
use crate::value::{Navigable, Value, ValueType};

/// Options for a single `find`
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Value substituted when the step does not resolve
    pub otherwise: Option<Value>,
}

impl FindOptions {
    /// Options substituting `value` for an unresolved step
    #[must_use]
    pub fn otherwise(value: impl Into<Value>) -> Self {
        Self {
            otherwise: Some(value.into()),
        }
    }
}

/// A value and the path that led to it
#[derive(Debug, Clone)]
pub enum Located {
    /// General value resolved through the resolver
    Reflective {
        /// Breadcrumb
        path: String,
        /// Located value
        value: Value,
    },
    /// Fixed value that absorbs navigation
    Constant {
        /// Breadcrumb
        path: String,
        /// Fixed value
        value: Value,
    },
    /// Failed navigation
    Invalid(Failure),
    /// User navigable object
    Adapter {
        /// Breadcrumb
        path: String,
        /// Object doing its own navigation
        object: Arc<dyn Navigable>,
    },
    /// String-keyed maps and sequences resolved without the general resolver
    Fast {
        /// Breadcrumb
        path: String,
        /// Located value
        value: Value,
    },
    /// JSON document decoded on first use
    LazyJson(LazyDocument),
    /// YAML document decoded on first use
    LazyYaml(LazyDocument),
}

impl Located {
    /// Wrap a root value
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self::at("", value)
    }

    /// Wrap a value found at `path`
    ///
    /// Navigable objects get the adapter variant, everything else is
    /// reflective.
    #[must_use]
    pub fn at(path: impl Into<String>, value: Value) -> Self {
        match value.unboxed() {
            Value::Navigable(object) => Located::Adapter {
                path: path.into(),
                object: Arc::clone(object),
            },
            _ => Located::Reflective {
                path: path.into(),
                value,
            },
        }
    }

    /// Fixed value with an empty path
    #[must_use]
    pub fn constant(value: impl Into<Value>) -> Self {
        Located::Constant {
            path: String::new(),
            value: value.into(),
        }
    }

    /// Fixed value at `path`
    #[must_use]
    pub fn constant_at(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Located::Constant {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Failed navigation at `path`
    #[must_use]
    pub fn invalid(path: impl Into<String>, error: PathError) -> Self {
        Located::Invalid(Failure::new(path, error))
    }

    /// Wrap a user navigable object
    pub fn adapter<N: Navigable + 'static>(object: N) -> Self {
        Located::Adapter {
            path: String::new(),
            object: Arc::new(object),
        }
    }

    /// Wrap a root value in the fast-path variant
    #[must_use]
    pub fn fast(value: Value) -> Self {
        Located::Fast {
            path: String::new(),
            value,
        }
    }

    /// JSON bytes, decoded on first use
    #[must_use]
    pub fn lazy_json(bytes: impl Into<Arc<[u8]>>) -> Self {
        Located::LazyJson(LazyDocument::new(bytes.into()))
    }

    /// YAML bytes, decoded on first use
    #[must_use]
    pub fn lazy_yaml(bytes: impl Into<Arc<[u8]>>) -> Self {
        Located::LazyYaml(LazyDocument::new(bytes.into()))
    }

    /// Navigate one segment
    #[must_use]
    pub fn find(&self, segment: impl Into<Segment>) -> Located {
        self.find_with(segment, &FindOptions::default())
    }

    /// Navigate one segment, substituting the default from `options` when
    /// the step does not resolve
    #[must_use]
    pub fn find_with(&self, segment: impl Into<Segment>, options: &FindOptions) -> Located {
        let segment = segment.into();
        let found = match self {
            Located::Invalid(failure) => return Located::Invalid(failure.extended(&segment)),
            Located::Constant { path, value } => {
                return Located::Constant {
                    path: segment.extend(path),
                    value: options.otherwise.clone().unwrap_or_else(|| value.clone()),
                };
            }
            Located::LazyJson(doc) => return doc.decoded_json().find_with(segment, options),
            Located::LazyYaml(doc) => return doc.decoded_yaml().find_with(segment, options),
            Located::Reflective { path, value } => resolver::resolve(path, value, &segment),
            Located::Adapter { path, object } => adapter::find(path, object.as_ref(), &segment),
            Located::Fast { path, value } => fast::find(path, value, &segment),
        };

        match (&found, &options.otherwise) {
            (Located::Invalid(failure), Some(default)) => {
                tracing::trace!(
                    target: "pathor::located",
                    path = failure.path(),
                    error = %failure.error(),
                    "default substituted"
                );
                Located::at(failure.path().to_string(), default.clone())
            }
            _ => found,
        }
    }

    /// Navigate a dotted path such as `A.B.C`
    #[must_use]
    pub fn find_path(&self, dotted: &str) -> Located {
        dotted
            .split('.')
            .filter(|part| !part.is_empty())
            .fold(self.clone(), |located, part| located.find(part))
    }

    /// Breadcrumb of this value
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Located::Reflective { path, .. }
            | Located::Constant { path, .. }
            | Located::Adapter { path, .. }
            | Located::Fast { path, .. } => path,
            Located::Invalid(failure) => failure.path(),
            Located::LazyJson(doc) | Located::LazyYaml(doc) => doc.path(),
        }
    }

    /// Same value under a different breadcrumb
    #[must_use]
    pub fn with_path(self, new_path: impl Into<String>) -> Located {
        let new_path = new_path.into();
        match self {
            Located::Reflective { value, .. } => Located::Reflective {
                path: new_path,
                value,
            },
            Located::Constant { value, .. } => Located::Constant {
                path: new_path,
                value,
            },
            Located::Fast { value, .. } => Located::Fast {
                path: new_path,
                value,
            },
            Located::Adapter { object, .. } => Located::Adapter {
                path: new_path,
                object,
            },
            Located::Invalid(failure) => Located::Invalid(failure.at(new_path)),
            Located::LazyJson(doc) => Located::LazyJson(doc.with_path(new_path)),
            Located::LazyYaml(doc) => Located::LazyYaml(doc.with_path(new_path)),
        }
    }

    /// Underlying value; `None` when invalid
    #[must_use]
    pub fn raw(&self) -> Option<Value> {
        match self {
            Located::Reflective { value, .. }
            | Located::Constant { value, .. }
            | Located::Fast { value, .. } => Some(value.clone()),
            Located::Adapter { object, .. } => Some(object.raw()),
            Located::Invalid(_) => None,
            Located::LazyJson(doc) => doc.decoded_json().raw(),
            Located::LazyYaml(doc) => doc.decoded_yaml().raw(),
        }
    }

    /// Underlying value, or the failure that replaced it
    ///
    /// # Errors
    ///
    /// Returns the causal error of an invalid value.
    pub fn into_result(self) -> PathResult<Value> {
        match self.resolved() {
            Located::Invalid(failure) => Err(failure.error().clone()),
            other => other.raw().ok_or(PathError::NilElement),
        }
    }

    /// Causal error of an invalid value
    #[must_use]
    pub fn error(&self) -> Option<&PathError> {
        self.failure().map(Failure::error)
    }

    /// Failure of an invalid value, as a `std::error::Error`
    #[must_use]
    pub fn failure(&self) -> Option<&Failure> {
        match self.resolved() {
            Located::Invalid(failure) => Some(failure),
            _ => None,
        }
    }

    /// Shape of the underlying value; `None` when invalid
    #[must_use]
    pub fn value_type(&self) -> Option<ValueType> {
        self.raw().map(|value| value.value_type())
    }

    /// Whether navigation failed
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self.resolved(), Located::Invalid(_))
    }

    /// Whether this is a constant
    #[must_use]
    pub fn is_constant(&self) -> bool {
        matches!(self, Located::Constant { .. })
    }

    /// Constant `false`, the value `Otherwise` treats like a failure
    #[must_use]
    pub fn is_false_constant(&self) -> bool {
        matches!(self, Located::Constant { value, .. } if value.as_bool() == Some(false))
    }

    /// Nil, an empty optional, or an invalid value
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.raw().is_none_or(|value| value.is_nil())
    }

    /// Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.check(|v| matches!(v, Value::Bool(_)))
    }

    /// String
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.check(|v| matches!(v, Value::String(_)))
    }

    /// Signed integer
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.check(|v| matches!(v, Value::Int(..)))
    }

    /// Unsigned integer
    #[must_use]
    pub fn is_uint(&self) -> bool {
        self.check(|v| matches!(v, Value::Uint(..)))
    }

    /// Floating point
    #[must_use]
    pub fn is_float(&self) -> bool {
        self.check(|v| matches!(v, Value::Float(..)))
    }

    /// Complex number
    #[must_use]
    pub fn is_complex(&self) -> bool {
        self.check(|v| matches!(v, Value::Complex(..)))
    }

    /// Any numeric scalar
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.check(Value::is_numeric)
    }

    /// Sequence
    #[must_use]
    pub fn is_slice(&self) -> bool {
        self.check(|v| matches!(v, Value::Sequence(_)))
    }

    /// Map
    #[must_use]
    pub fn is_map(&self) -> bool {
        self.check(|v| matches!(v, Value::Map(_)))
    }

    /// Record
    #[must_use]
    pub fn is_record(&self) -> bool {
        self.check(|v| matches!(v, Value::Record(_)))
    }

    /// Callable
    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.check(|v| matches!(v, Value::Callable(_)))
    }

    fn check(&self, predicate: impl Fn(&Value) -> bool) -> bool {
        self.raw()
            .as_ref()
            .and_then(Value::deref_value)
            .is_some_and(predicate)
    }

    /// Lazy variants after decoding; every other variant as is
    #[must_use]
    pub fn resolved(&self) -> &Located {
        match self {
            Located::LazyJson(doc) => doc.decoded_json(),
            Located::LazyYaml(doc) => doc.decoded_yaml(),
            other => other,
        }
    }
}

impl From<Value> for Located {
    fn from(value: Value) -> Self {
        Located::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;

    fn nested() -> Value {
        let c = Record::builder("C").field("C", 1).build();
        let b = Record::builder("B").field("B", c).build();
        Value::from(Record::builder("A").field("A", b).build())
    }

    #[test]
    fn test_paths_extend() {
        let root = Located::new(nested());
        let found = root.find("A").find("B").find("C");
        assert_eq!(found.path(), "A.B.C");
        assert_eq!(found.raw(), Some(Value::from(1)));
    }

    #[test]
    fn test_invalid_stays_invalid() {
        let root = Located::new(nested());
        let missing = root.find("A").find("Z");
        let deeper = missing.find("Q").find(3_i64);
        assert_eq!(deeper.path(), "A.Z.Q[3]");
        assert_eq!(deeper.error(), missing.error());
        assert!(matches!(deeper.error(), Some(PathError::NotFound { .. })));
    }

    #[test]
    fn test_constant_absorbs_navigation() {
        let constant = Located::constant(5);
        let found = constant.find("anything");
        assert_eq!(found.path(), "anything");
        assert_eq!(found.raw(), Some(Value::from(5)));

        let defaulted = constant.find_with("x", &FindOptions::otherwise("d"));
        assert_eq!(defaulted.raw(), Some(Value::from("d")));
    }

    #[test]
    fn test_find_default_replaces_failure() {
        let root = Located::new(nested());
        let found = root.find_with("Missing", &FindOptions::otherwise(42));
        assert!(!found.is_invalid());
        assert_eq!(found.path(), "Missing");
        assert_eq!(found.raw(), Some(Value::from(42)));
    }

    #[test]
    fn test_failure_exposes_source() {
        use std::error::Error;

        let missing = Located::new(nested()).find("Nope");
        let failure = missing.failure().expect("lookup should fail");
        assert!(failure.source().is_some());
        assert!(failure.to_string().starts_with("Nope:"));
    }
}
