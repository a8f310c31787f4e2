//! Token definitions for query lexical analysis

/// Query tokens
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Structural tokens
    /// Step separator (.)
    Dot,
    /// Range separator inside an array constructor (..)
    DoubleDot,
    /// Left bracket ([)
    LeftBracket,
    /// Right bracket (])
    RightBracket,
    /// Left parenthesis (()
    LeftParen,
    /// Right parenthesis ())
    RightParen,
    /// Comma separator (,)
    Comma,
    /// Slice separator (:)
    Colon,

    // Literals
    /// String literal
    String(String),
    /// Integer literal
    Integer(i64),
    /// Floating-point literal
    Number(f64),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,

    // Operators
    /// Addition (+)
    Plus,
    /// String concatenation (&)
    Ampersand,
    /// Equality (=)
    Equal,
    /// Inequality (!=)
    NotEqual,
    /// Less than (<)
    Less,
    /// Less than or equal (<=)
    LessEq,
    /// Greater than (>)
    Greater,
    /// Greater than or equal (>=)
    GreaterEq,
    /// Conjunction (`and`)
    And,
    /// Disjunction (`or`)
    Or,
    /// Membership (`in`)
    In,

    // Names
    /// Field name, bare or backtick-quoted
    Identifier(String),
    /// `$name`; empty for a lone `$`
    Variable(String),

    // Special
    /// End of input
    Eof,
}

impl Token {
    /// Check if token is a comparison operator
    #[inline]
    #[must_use]
    pub fn is_comparison_operator(&self) -> bool {
        matches!(
            self,
            Token::Equal
                | Token::NotEqual
                | Token::Less
                | Token::LessEq
                | Token::Greater
                | Token::GreaterEq
                | Token::In
        )
    }

    /// Check if token is a literal value
    #[inline]
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::String(_)
                | Token::Integer(_)
                | Token::Number(_)
                | Token::True
                | Token::False
                | Token::Null
        )
    }

    /// Get string representation for diagnostics
    #[must_use]
    pub fn as_debug_str(&self) -> &'static str {
        match self {
            Token::Dot => ".",
            Token::DoubleDot => "..",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::String(_) => "string",
            Token::Integer(_) => "integer",
            Token::Number(_) => "number",
            Token::True => "true",
            Token::False => "false",
            Token::Null => "null",
            Token::Plus => "+",
            Token::Ampersand => "&",
            Token::Equal => "=",
            Token::NotEqual => "!=",
            Token::Less => "<",
            Token::LessEq => "<=",
            Token::Greater => ">",
            Token::GreaterEq => ">=",
            Token::And => "and",
            Token::Or => "or",
            Token::In => "in",
            Token::Identifier(_) => "identifier",
            Token::Variable(_) => "variable",
            Token::Eof => "end of input",
        }
    }
}

/// Token plus the character offset it starts at
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token
    pub token: Token,
    /// Character offset into the query text
    pub offset: usize,
}
