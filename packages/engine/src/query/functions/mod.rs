//! Query functions
//!
//! A `FunctionRegistry` is an immutable snapshot of named functions, built
//! once by `FunctionRegistryBuilder` and shared by every query a compiler
//! produces. Built-ins:
//! - `$count`, `$sum`, `$max`, `$min` - aggregates over a sequence
//! - `$string`, `$number`, `$boolean`, `$length` - conversions
//! - `$exists`, `$not`, `$contains` - predicates
//! - `$first`, `$last`, `$distinct`, `$keys`, `$append`, `$union`,
//!   `$intersection` - collection helpers

mod builtins;
mod call;
mod registry;

pub use call::Call;
pub use registry::{Function, FunctionImpl, FunctionRegistry, FunctionRegistryBuilder};
