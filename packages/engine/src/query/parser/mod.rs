//! Recursive-descent query parser
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! expression := term [ ('+' | '&') expression ]
//! term       := literal | array | range | path
//! path       := step ( '.' step )*
//! step       := ( name | '$' | '$' name '(' args ')' | '(' expression ')' ) clause*
//! clause     := '[' ( int | [int] ':' [int] | condition ) ']'
//! condition  := conjunction ( 'or' conjunction )*
//! conjunction:= comparison ( 'and' comparison )*
//! comparison := operand [ ( '=' | '!=' | '<' | '<=' | '>' | '>=' | 'in' ) operand ]
//! ```

mod core;
mod expressions;
mod filters;
mod paths;

pub use core::parse;
