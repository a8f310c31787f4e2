//! Commonly used types
//!
//! `use pathor_engine::prelude::*;` brings in everything needed to locate
//! values, build combinators and compile queries.

pub use crate::combinators::{Expr, Runner, evaluate};
pub use crate::config::{EngineConfig, Validator};
pub use crate::error::{PathError, PathResult, QueryError, QueryResult};
pub use crate::located::{FindOptions, Located, Segment};
pub use crate::query::{Compiler, FunctionRegistry, Query, compile};
pub use crate::scope::{Environment, Scope};
pub use crate::semantics::{CompareOp, Semantics, StandardSemantics, Truth};
pub use crate::value::{
    Callable, Mapping, Navigable, NavigableError, Record, Sequence, Value, ValueType, to_value,
};
