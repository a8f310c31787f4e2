//! Parser state and token-stream helpers

use std::collections::VecDeque;

use crate::error::{QueryError, QueryResult, invalid_query_error};
use crate::query::ast::Node;
use crate::query::tokenizer::Tokenizer;
use crate::query::tokens::{Spanned, Token};

/// Nesting limit for parentheses, clauses and call arguments
const MAX_DEPTH: usize = 128;

static EOF: Token = Token::Eof;

/// Parser over a tokenized query
pub struct Parser {
    pub(super) tokens: VecDeque<Spanned>,
    pub(super) input: String,
    pub(super) depth: usize,
}

/// Parse query text into a tree
///
/// # Errors
///
/// Returns the first lexical or syntax error with its character offset.
pub fn parse(text: &str) -> QueryResult<Node> {
    Parser::new(text)?.parse()
}

impl Parser {
    /// Tokenize `input` and prepare to parse it
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` when the text does not tokenize.
    pub fn new(input: &str) -> QueryResult<Self> {
        Ok(Self {
            tokens: Tokenizer::new(input).tokenize()?,
            input: input.to_string(),
            depth: 0,
        })
    }

    /// Parse a complete expression; trailing tokens are an error
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` at the first token that does not fit the grammar.
    pub fn parse(mut self) -> QueryResult<Node> {
        let node = self.parse_expression()?;
        match self.peek_token() {
            Token::Eof => Ok(node),
            token => Err(self.unexpected(token)),
        }
    }

    /// Peek at the next token without consuming it
    #[inline]
    pub(super) fn peek_token(&self) -> &Token {
        self.peek_nth(0)
    }

    #[inline]
    pub(super) fn peek_nth(&self, n: usize) -> &Token {
        self.tokens.get(n).map_or(&EOF, |s| &s.token)
    }

    /// Offset of the next token
    #[inline]
    pub(super) fn offset(&self) -> usize {
        self.tokens
            .front()
            .map_or_else(|| self.input.chars().count(), |s| s.offset)
    }

    /// Consume the next token from the token stream
    #[inline]
    pub(super) fn consume_token(&mut self) -> Spanned {
        self.tokens.pop_front().unwrap_or_else(|| Spanned {
            token: Token::Eof,
            offset: self.input.chars().count(),
        })
    }

    /// Expect a token of the same kind as `expected` and consume it
    pub(super) fn expect_token(&mut self, expected: &Token) -> QueryResult<usize> {
        if std::mem::discriminant(self.peek_token()) == std::mem::discriminant(expected) {
            Ok(self.consume_token().offset)
        } else {
            Err(self.error(
                format!(
                    "expected '{}', found '{}'",
                    expected.as_debug_str(),
                    self.peek_token().as_debug_str()
                ),
                self.offset(),
            ))
        }
    }

    /// Run `f` one nesting level deeper
    pub(super) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> QueryResult<T>,
    ) -> QueryResult<T> {
        self.deepen()?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Count one more link of an operator chain against the nesting limit
    ///
    /// The caller restores `depth` once the chain is complete.
    pub(super) fn deepen(&mut self) -> QueryResult<()> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error("expression nested too deeply", self.offset()));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn error(&self, reason: impl Into<String>, offset: usize) -> QueryError {
        invalid_query_error(&self.input, reason, offset)
    }

    pub(super) fn unexpected(&self, token: &Token) -> QueryError {
        let reason = match token {
            Token::Eof => "unexpected end of input".to_string(),
            token => format!("unexpected '{}'", token.as_debug_str()),
        };
        self.error(reason, self.offset())
    }
}
