//! Parsed query tree
//!
//! Produced by the parser and lowered to combinators by the compiler. Offsets
//! are character offsets into the query text.

use crate::value::Value;

/// Query expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Dotted sequence of steps
    Path(PathNode),
    /// Binary operator application
    Binary(BinaryNode),
    /// Scalar literal
    Literal(LiteralNode),
    /// `[a, b, c]` literal array
    Array(ArrayNode),
    /// Function call
    Function(FunctionNode),
    /// `[start..end]` integer range
    Range(RangeNode),
}

/// Dotted sequence of steps
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    /// Steps applied left to right
    pub steps: Vec<Step>,
}

/// One step of a path plus its bracket clauses
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// What the step selects
    pub kind: StepKind,
    /// `[...]` clauses applied in order after the step
    pub clauses: Vec<Clause>,
    /// Offset of the step's first token
    pub offset: usize,
}

/// What a path step selects
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    /// Field or key name
    Name(String),
    /// `$`, the current context
    Context,
    /// Parenthesized sub-expression
    SubExpr(Box<Node>),
    /// Function call
    Function(FunctionNode),
}

/// Bracket clause following a step
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `[i]`
    Index(i64),
    /// `[start:end]`, either bound optional
    Slice {
        /// Inclusive start
        start: Option<i64>,
        /// Exclusive end
        end: Option<i64>,
    },
    /// `[condition]`
    Filter(Box<Node>),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `&`
    Concat,
    /// `=`
    Eq,
    /// `!=`
    NotEq,
    /// `<`
    Less,
    /// `<=`
    LessEq,
    /// `>`
    Greater,
    /// `>=`
    GreaterEq,
    /// `in`
    In,
    /// `and`
    And,
    /// `or`
    Or,
}

/// Binary operator application
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryNode {
    /// Operator
    pub operator: BinaryOp,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
    /// Offset of the operator token
    pub offset: usize,
}

/// Scalar literal
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralNode {
    /// Literal value
    pub value: Value,
}

/// Literal array
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayNode {
    /// Elements in source order
    pub items: Vec<LiteralNode>,
}

/// Function call
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    /// Name without the leading `$`
    pub name: String,
    /// Explicit arguments
    pub args: Vec<Node>,
    /// Offset of the `$name` token
    pub offset: usize,
}

/// Integer range constructor
#[derive(Debug, Clone, PartialEq)]
pub struct RangeNode {
    /// Inclusive start
    pub start: i64,
    /// Inclusive end
    pub end: i64,
}
