//! # Pathor engine
//!
//! Path navigation and query evaluation over dynamically shaped data.
//!
//! ## Features
//!
//! - **Located values**: every navigation result carries its breadcrumb path,
//!   and failures are values that keep navigating instead of panicking
//! - **Closed value model** covering scalars of every width, sequences, typed
//!   maps, records with embedded members, optionals and zero-argument methods
//! - **Lazy JSON and YAML** documents decoded on first navigation
//! - **Combinator library** for filters, maps, quantifiers, set algebra,
//!   arithmetic, comparison and fallbacks
//! - **JSONata-style query language** compiled into re-runnable, thread-safe
//!   combinator trees
//!
//! ## Usage
//!
//! ```rust
//! use pathor_engine::prelude::*;
//! use serde_json::json;
//!
//! let data = Value::from(json!({"A": {"B": {"C": 1}}}));
//! let found = Located::new(data.clone()).find_path("A.B.C");
//! assert_eq!(found.path(), "A.B.C");
//! assert_eq!(found.raw(), Some(Value::from(1_i64)));
//!
//! let missing = Located::new(data).find_path("A.B.Z");
//! assert!(missing.is_invalid());
//! assert_eq!(missing.path(), "A.B.Z");
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod combinators;
pub mod config;
pub mod error;
pub mod located;
pub mod query;
pub mod resolver;
pub mod scope;
pub mod semantics;
pub mod value;

pub mod prelude;
