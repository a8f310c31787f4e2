//! Function definitions and the registry snapshot

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use crate::config::{ConfigResult, ConfigurationError, Validator};
use crate::error::PathError;
use crate::located::Located;
use crate::scope::Scope;

/// Signature of a query function body
///
/// The scope carries the call's arguments (see `Scope::args`) on top of the
/// caller's frame; the same arguments are passed as a slice.
pub type FunctionImpl = dyn Fn(&Scope, &[Located]) -> Located + Send + Sync;

/// Named function with arity bounds
#[derive(Clone)]
pub struct Function {
    name: String,
    min_args: usize,
    max_args: usize,
    func: Arc<FunctionImpl>,
}

impl Function {
    /// Create a function accepting `min_args..=max_args` arguments
    pub fn new<F>(name: impl Into<String>, min_args: usize, max_args: usize, func: F) -> Self
    where
        F: Fn(&Scope, &[Located]) -> Located + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            min_args,
            max_args: max_args.max(min_args),
            func: Arc::new(func),
        }
    }

    /// Name without the leading `$`
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fewest accepted arguments
    #[inline]
    #[must_use]
    pub fn min_args(&self) -> usize {
        self.min_args
    }

    /// Most accepted arguments
    #[inline]
    #[must_use]
    pub fn max_args(&self) -> usize {
        self.max_args
    }

    /// Whether `count` arguments are accepted
    #[inline]
    #[must_use]
    pub fn accepts(&self, count: usize) -> bool {
        (self.min_args..=self.max_args).contains(&count)
    }

    /// Invoke with already evaluated arguments
    ///
    /// A wrong argument count is an invalid result, not a panic.
    #[must_use]
    pub fn call(&self, scope: &Scope, args: &[Located]) -> Located {
        if !self.accepts(args.len()) {
            let expected = if self.min_args == self.max_args {
                self.min_args.to_string()
            } else {
                format!("{} to {}", self.min_args, self.max_args)
            };
            return Located::invalid(
                scope.position().path(),
                PathError::InvalidEvaluationFunction(format!(
                    "${} takes {expected} argument(s), got {}",
                    self.name,
                    args.len()
                )),
            );
        }
        (self.func)(&scope.with_args(args.to_vec()), args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("min_args", &self.min_args)
            .field("max_args", &self.max_args)
            .finish_non_exhaustive()
    }
}

/// Immutable name → function map
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, Function>,
}

impl FunctionRegistry {
    /// Start an empty builder
    #[must_use]
    pub fn builder() -> FunctionRegistryBuilder {
        FunctionRegistryBuilder {
            functions: HashMap::new(),
        }
    }

    /// Registry holding only the built-in functions
    #[must_use]
    pub fn standard() -> Self {
        Self::builder().with_builtins().build()
    }

    /// Look up a function by name (without `$`)
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Whether a function is registered under `name`
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered functions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl Validator for FunctionRegistry {
    fn validate(&self) -> ConfigResult<()> {
        for name in self.functions.keys() {
            let usable = !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_');
            if !usable {
                return Err(ConfigurationError::InvalidFunctionName(name.clone()));
            }
        }
        Ok(())
    }
}

/// Builder for `FunctionRegistry`
#[derive(Debug, Clone)]
pub struct FunctionRegistryBuilder {
    functions: HashMap<String, Function>,
}

impl FunctionRegistryBuilder {
    /// Add every built-in function; later registrations may replace them
    #[must_use]
    pub fn with_builtins(mut self) -> Self {
        for function in super::builtins::all() {
            self.functions.insert(function.name().to_string(), function);
        }
        self
    }

    /// Register a function; a leading `$` in `name` is ignored
    #[must_use]
    pub fn register<F>(self, name: &str, min_args: usize, max_args: usize, func: F) -> Self
    where
        F: Fn(&Scope, &[Located]) -> Located + Send + Sync + 'static,
    {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.with_function(Function::new(name, min_args, max_args, func))
    }

    /// Register a prepared function
    #[must_use]
    pub fn with_function(mut self, function: Function) -> Self {
        if let Some(previous) = self.functions.insert(function.name().to_string(), function) {
            log::debug!("Function registry: replaced ${}", previous.name());
        }
        self
    }

    /// Freeze into a registry
    #[must_use]
    pub fn build(self) -> FunctionRegistry {
        FunctionRegistry {
            functions: self.functions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_register_strips_dollar() {
        let registry = FunctionRegistry::builder()
            .register("$twice", 1, 1, |_, args| args[0].clone())
            .build();
        assert!(registry.contains("twice"));
        assert_eq!(registry.names(), vec!["twice"]);
    }

    #[test]
    fn test_standard_has_builtins() {
        let registry = FunctionRegistry::default();
        for name in ["count", "sum", "max", "min", "string", "number", "keys", "intersection"] {
            assert!(registry.contains(name), "missing ${name}");
        }
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_bad_names_fail_validation() {
        let registry = FunctionRegistry::builder()
            .register("two words", 0, 0, |scope, _| scope.position().clone())
            .build();
        assert_eq!(
            registry.validate(),
            Err(ConfigurationError::InvalidFunctionName("two words".to_string()))
        );
    }

    #[test]
    fn test_arity_mismatch_is_invalid() {
        let function = Function::new("one", 1, 1, |_, args| args[0].clone());
        let scope = Scope::root(Located::new(Value::Nil));
        let result = function.call(&scope, &[]);
        assert!(matches!(
            result.error(),
            Some(PathError::InvalidEvaluationFunction(message)) if message.contains("$one takes 1")
        ));
    }
}
