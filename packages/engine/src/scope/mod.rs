//! Execution scopes
//!
//! A scope is one frame in a singly-linked chain. Each frame knows the
//! current context value, the position (pipeline value) combinators read
//! from, bound arguments, and the environment shared by the whole run.

use std::fmt;
use std::sync::Arc;

use crate::config::EngineConfig;
use crate::located::Located;
use crate::semantics::{Semantics, StandardSemantics};

/// Settings and collaborators shared by every frame of a run
#[derive(Debug, Clone)]
pub struct Environment {
    config: EngineConfig,
    semantics: Arc<dyn Semantics>,
}

impl Environment {
    /// Environment with the given configuration and semantics
    #[must_use]
    pub fn new(config: EngineConfig, semantics: Arc<dyn Semantics>) -> Self {
        Self { config, semantics }
    }

    /// Engine configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Truthiness and comparison collaborator
    #[must_use]
    pub fn semantics(&self) -> &dyn Semantics {
        self.semantics.as_ref()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(EngineConfig::default(), Arc::new(StandardSemantics))
    }
}

struct Frame {
    current: Located,
    position: Located,
    parent: Option<Scope>,
    args: Arc<[Located]>,
    env: Arc<Environment>,
}

/// Handle to a scope frame; cloning is cheap
#[derive(Clone)]
pub struct Scope(Arc<Frame>);

impl Scope {
    /// Root frame with the default environment
    #[must_use]
    pub fn root(value: Located) -> Self {
        Self::with_env(value, Arc::new(Environment::default()))
    }

    /// Root frame with an explicit environment
    #[must_use]
    pub fn with_env(value: Located, env: Arc<Environment>) -> Self {
        Scope(Arc::new(Frame {
            current: value.clone(),
            position: value,
            parent: None,
            args: Arc::from(Vec::new()),
            env,
        }))
    }

    fn push(&self, current: Located, position: Located, args: Arc<[Located]>) -> Self {
        Scope(Arc::new(Frame {
            current,
            position,
            parent: Some(self.clone()),
            args,
            env: Arc::clone(&self.0.env),
        }))
    }

    /// New frame whose current value and position are `value`
    #[must_use]
    pub fn nest(&self, value: Located) -> Self {
        self.push(value.clone(), value, Arc::clone(&self.0.args))
    }

    /// New frame with a new position and the same current value
    #[must_use]
    pub fn step(&self, position: Located) -> Self {
        self.push(self.0.current.clone(), position, Arc::clone(&self.0.args))
    }

    /// New frame with bound arguments
    #[must_use]
    pub fn with_args(&self, args: Vec<Located>) -> Self {
        self.push(self.0.current.clone(), self.0.position.clone(), Arc::from(args))
    }

    /// Context value
    #[must_use]
    pub fn current(&self) -> &Located {
        &self.0.current
    }

    /// Pipeline value
    #[must_use]
    pub fn position(&self) -> &Located {
        &self.0.position
    }

    /// Enclosing frame
    #[must_use]
    pub fn parent(&self) -> Option<&Scope> {
        self.0.parent.as_ref()
    }

    /// Bound arguments
    #[must_use]
    pub fn args(&self) -> &[Located] {
        &self.0.args
    }

    /// Shared environment
    #[must_use]
    pub fn env(&self) -> &Arc<Environment> {
        &self.0.env
    }

    /// Engine configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        self.0.env.config()
    }

    /// Truthiness and comparison collaborator
    #[must_use]
    pub fn semantics(&self) -> &dyn Semantics {
        self.0.env.semantics()
    }

    /// Number of frames up to and including the root
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |scope| scope.parent()).count()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("current", &self.0.current.path())
            .field("position", &self.0.position.path())
            .field("args", &self.0.args.len())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_frames_link() {
        let root = Scope::root(Located::new(Value::from(1)));
        let nested = root.nest(Located::new(Value::from(2)));
        let stepped = nested.step(Located::new(Value::from(3)));

        assert_eq!(stepped.current().raw(), Some(Value::from(2)));
        assert_eq!(stepped.position().raw(), Some(Value::from(3)));
        assert_eq!(stepped.depth(), 3);
        assert_eq!(
            stepped.parent().and_then(Scope::parent).map(|s| s.current().raw()),
            Some(Some(Value::from(1)))
        );
    }

    #[test]
    fn test_args_are_inherited() {
        let root = Scope::root(Located::new(Value::Nil));
        let bound = root.with_args(vec![Located::constant(7)]);
        let nested = bound.nest(Located::new(Value::from("x")));
        assert_eq!(nested.args().len(), 1);
        assert_eq!(nested.config().max_sequence_len, 100_000);
    }
}
