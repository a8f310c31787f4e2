//! Fluent query builder
//!
//! `Pathor::query(text)` starts an `Uncompiled` builder. Functions and engine
//! options are added by chaining, and `compile()` moves the builder into the
//! `Compiled` state, which is the only state that can run.

pub mod compile;
pub mod configure;
pub mod core;
pub mod run;

pub use core::*;
