//! Query language front end
//!
//! Text is tokenized, parsed into an `ast::Node` tree and lowered by the
//! `Compiler` into a combinator tree wrapped in a re-runnable `Query`.

pub mod ast;
pub mod compiler;
pub mod functions;
mod parser;
mod tokenizer;
pub mod tokens;

pub use compiler::{Compiler, Query, compile};
pub use functions::{Function, FunctionRegistry, FunctionRegistryBuilder};
pub use parser::parse;
