//! Configuration methods for the uncompiled builder

use std::sync::Arc;

use pathor_engine::located::Located;
use pathor_engine::scope::Scope;
use pathor_engine::semantics::Semantics;

use super::core::{Pathor, Uncompiled};

impl Pathor<Uncompiled> {
    /// Register a function accepting any number of arguments
    ///
    /// A leading `$` in `name` is ignored. The body receives the caller's
    /// scope and the evaluated arguments.
    #[must_use]
    pub fn function<F>(self, name: &str, func: F) -> Self
    where
        F: Fn(&Scope, &[Located]) -> Located + Send + Sync + 'static,
    {
        self.function_with_arity(name, 0, usize::MAX, func)
    }

    /// Register a function with arity bounds
    ///
    /// When called without arguments inside a path, a function with
    /// `min_args > 0` receives the pipeline value as its only argument.
    #[must_use]
    pub fn function_with_arity<F>(
        mut self,
        name: &str,
        min_args: usize,
        max_args: usize,
        func: F,
    ) -> Self
    where
        F: Fn(&Scope, &[Located]) -> Located + Send + Sync + 'static,
    {
        self.state.functions = self.state.functions.register(name, min_args, max_args, func);
        self
    }

    /// Unwrap one-element sequence results to their element
    #[must_use]
    pub fn unwrap_singletons(mut self, enabled: bool) -> Self {
        self.state.config = self.state.config.with_unwrap_singletons(enabled);
        self
    }

    /// Cap on the length of generated integer ranges
    #[must_use]
    pub fn max_sequence_len(mut self, limit: usize) -> Self {
        self.state.config = self.state.config.with_max_sequence_len(limit);
        self
    }

    /// Navigate string-keyed maps and sequences through the direct path
    #[must_use]
    pub fn fast_path(mut self, enabled: bool) -> Self {
        self.state.config = self.state.config.with_fast_path(enabled);
        self
    }

    /// Replace the truthiness and comparison rules
    #[must_use]
    pub fn semantics(mut self, semantics: Arc<dyn Semantics>) -> Self {
        self.state.semantics = semantics;
        self
    }
}
