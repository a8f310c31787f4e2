//! Error handling module
//!
//! Errors are values in this crate: navigation never panics and never
//! returns `Err` from `find`. Failures are carried inside invalid located
//! values together with the breadcrumb at which they happened. The `Result`
//! aliases here are for the boundaries where callers leave that world.

pub mod constructors;
mod types;

pub use constructors::{invalid_query_error, not_an_array, not_found, type_mismatch, unsupported};
pub use types::{PathError, PathResult, QueryError, QueryResult};
