//! Record-like values: named fields, zero-argument methods, embedding
//!
//! Records model native structs. Fields and methods are either exported
//! (reachable by navigation) or hidden. An embedded field promotes its
//! record's fields and methods into the enclosing record's lookup scope.

use std::fmt;
use std::sync::Arc;

use super::Value;

/// Outcome of invoking a callable
pub type CallResult = Result<Value, String>;

/// Declared result shape of a callable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    /// A single value
    Value,
    /// A value plus an error-like second result
    ValueAndError,
    /// Any other number of results; never invocable
    Values(usize),
}

/// Zero-argument behaviour attached to a record or used as a value
#[derive(Clone)]
pub struct Callable {
    name: String,
    arity: usize,
    returns: Returns,
    func: Arc<dyn Fn() -> CallResult + Send + Sync>,
}

impl Callable {
    /// Infallible zero-argument callable
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity: 0,
            returns: Returns::Value,
            func: Arc::new(move || Ok(func())),
        }
    }

    /// Zero-argument callable returning a value plus an error
    pub fn fallible<F, E>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Result<Value, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        Self {
            name: name.into(),
            arity: 0,
            returns: Returns::ValueAndError,
            func: Arc::new(move || func().map_err(|e| e.to_string())),
        }
    }

    /// Callable with an explicit signature
    ///
    /// Only `arity == 0` with `Returns::Value` or `Returns::ValueAndError` is
    /// ever invoked by navigation; other shapes describe members that exist
    /// but cannot be reached.
    pub fn with_signature<F>(name: impl Into<String>, arity: usize, returns: Returns, func: F) -> Self
    where
        F: Fn() -> CallResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            returns,
            func: Arc::new(func),
        }
    }

    /// Callable name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of declared parameters
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Declared result shape
    #[must_use]
    pub fn returns(&self) -> Returns {
        self.returns
    }

    /// Whether navigation may invoke this callable
    #[must_use]
    pub fn is_invocable(&self) -> bool {
        self.arity == 0 && !matches!(self.returns, Returns::Values(_))
    }

    /// Invoke the callable
    pub fn invoke(&self) -> CallResult {
        (self.func)()
    }

    /// Human readable signature, used in diagnostics
    #[must_use]
    pub fn signature(&self) -> String {
        let results = match self.returns {
            Returns::Value => "value".to_string(),
            Returns::ValueAndError => "(value, error)".to_string(),
            Returns::Values(n) => format!("{n} values"),
        };
        format!("fn({} params) -> {results}", self.arity)
    }

    pub(crate) fn same_as(&self, other: &Callable) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("signature", &self.signature())
            .finish()
    }
}

/// Named record field
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    value: Value,
    exported: bool,
    embedded: bool,
}

impl Field {
    /// Field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field value
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether navigation may read this field
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Whether this field is an anonymous embedding
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }
}

/// Named method
#[derive(Debug, Clone)]
pub struct Method {
    exported: bool,
    callable: Callable,
}

impl Method {
    /// Method name
    #[must_use]
    pub fn name(&self) -> &str {
        self.callable.name()
    }

    /// Whether navigation may call this method
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.exported
    }

    /// Underlying callable
    #[must_use]
    pub fn callable(&self) -> &Callable {
        &self.callable
    }
}

/// Struct-like value
#[derive(Debug, Clone)]
pub struct Record {
    type_name: String,
    fields: Vec<Field>,
    methods: Vec<Method>,
}

impl Record {
    /// Start building a record of the given type
    #[must_use]
    pub fn builder(type_name: impl Into<String>) -> RecordBuilder {
        RecordBuilder {
            record: Record {
                type_name: type_name.into(),
                fields: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Record type name
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Own fields, in declaration order
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Own methods, in declaration order
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Look up a field, searching own fields before promoted ones
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .or_else(|| self.embedded().into_iter().find_map(|inner| inner.field(name)))
    }

    /// Look up a method, searching own methods before promoted ones
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods
            .iter()
            .find(|m| m.name() == name)
            .or_else(|| self.embedded().into_iter().find_map(|inner| inner.method(name)))
    }

    /// Records embedded anonymously in this one
    #[must_use]
    pub fn embedded(&self) -> Vec<&Record> {
        self.fields
            .iter()
            .filter(|f| f.embedded)
            .filter_map(|f| match f.value.deref_value() {
                Some(Value::Record(inner)) => Some(inner.as_ref()),
                _ => None,
            })
            .collect()
    }

    /// Exported fields as seen from outside, embedded ones flattened
    ///
    /// Own fields shadow promoted fields of the same name.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<(&str, &Value)> {
        let mut out: Vec<(&str, &Value)> = self
            .fields
            .iter()
            .filter(|f| f.exported && !f.embedded)
            .map(|f| (f.name.as_str(), &f.value))
            .collect();
        for inner in self.embedded() {
            for (name, value) in inner.visible_fields() {
                if !out.iter().any(|(seen, _)| *seen == name) {
                    out.push((name, value));
                }
            }
        }
        out
    }
}

/// Fluent builder for records
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add an exported field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.fields.push(Field {
            name: name.into(),
            value: value.into(),
            exported: true,
            embedded: false,
        });
        self
    }

    /// Add a field navigation cannot read
    #[must_use]
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.record.fields.push(Field {
            name: name.into(),
            value: value.into(),
            exported: false,
            embedded: false,
        });
        self
    }

    /// Embed a record anonymously, promoting its members
    #[must_use]
    pub fn embed(mut self, inner: Record) -> Self {
        self.record.fields.push(Field {
            name: inner.type_name.clone(),
            value: Value::from(inner),
            exported: true,
            embedded: true,
        });
        self
    }

    /// Add an exported method
    #[must_use]
    pub fn method(mut self, callable: Callable) -> Self {
        self.record.methods.push(Method {
            exported: true,
            callable,
        });
        self
    }

    /// Add a method navigation cannot call
    #[must_use]
    pub fn hidden_method(mut self, callable: Callable) -> Self {
        self.record.methods.push(Method {
            exported: false,
            callable,
        });
        self
    }

    /// Finish the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}
