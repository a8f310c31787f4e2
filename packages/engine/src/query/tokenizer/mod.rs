//! Query tokenizer
//!
//! Converts query text into a queue of offset-tagged tokens. Whitespace and
//! `/* ... */` comments are dropped between tokens.

mod characters;
mod comments;
mod core;
mod numbers;
mod strings;

pub use core::Tokenizer;
