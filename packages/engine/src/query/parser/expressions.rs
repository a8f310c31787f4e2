//! Top-level expressions, literals and array constructors

use super::core::Parser;
use crate::error::QueryResult;
use crate::query::ast::{ArrayNode, BinaryNode, BinaryOp, LiteralNode, Node, RangeNode};
use crate::query::tokens::Token;
use crate::value::Value;

impl Parser {
    /// Parse `term [('+' | '&') expression]`, right-associative
    pub(super) fn parse_expression(&mut self) -> QueryResult<Node> {
        let left = self.parse_term()?;
        let operator = match self.peek_token() {
            Token::Plus => BinaryOp::Add,
            Token::Ampersand => BinaryOp::Concat,
            _ => return Ok(left),
        };
        let offset = self.consume_token().offset;
        let right = self.nested(Parser::parse_expression)?;
        Ok(Node::Binary(BinaryNode {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            offset,
        }))
    }

    fn parse_term(&mut self) -> QueryResult<Node> {
        match self.peek_token() {
            Token::LeftBracket => self.parse_array_or_range(),
            token if token.is_literal() => Ok(Node::Literal(self.parse_literal()?)),
            Token::Identifier(_) | Token::Variable(_) | Token::LeftParen => self.parse_path(),
            token => Err(self.unexpected(token)),
        }
    }

    /// Parse a scalar literal token
    pub(super) fn parse_literal(&mut self) -> QueryResult<LiteralNode> {
        let value = match self.peek_token() {
            Token::String(s) => Value::from(s.as_str()),
            Token::Integer(n) => Value::from(*n),
            Token::Number(n) => Value::from(*n),
            Token::True => Value::Bool(true),
            Token::False => Value::Bool(false),
            Token::Null => Value::Nil,
            token => return Err(self.unexpected(token)),
        };
        self.consume_token();
        Ok(LiteralNode { value })
    }

    /// Parse `[]`, `[lit, ...]` or `[a..b]`
    pub(super) fn parse_array_or_range(&mut self) -> QueryResult<Node> {
        self.expect_token(&Token::LeftBracket)?;

        if let (Token::Integer(start), Token::DoubleDot) = (self.peek_token(), self.peek_nth(1)) {
            let start = *start;
            self.consume_token();
            self.consume_token();
            let end = match self.peek_token() {
                Token::Integer(end) => *end,
                _ => return Err(self.error("range end must be an integer", self.offset())),
            };
            self.consume_token();
            self.expect_token(&Token::RightBracket)?;
            return Ok(Node::Range(RangeNode { start, end }));
        }

        let mut items = Vec::new();
        if !matches!(self.peek_token(), Token::RightBracket) {
            loop {
                if !self.peek_token().is_literal() {
                    return Err(self.error("array elements must be literals", self.offset()));
                }
                items.push(self.parse_literal()?);
                if !matches!(self.peek_token(), Token::Comma) {
                    break;
                }
                self.consume_token();
            }
        }
        self.expect_token(&Token::RightBracket)?;
        Ok(Node::Array(ArrayNode { items }))
    }
}

#[cfg(test)]
mod tests {
    use crate::query::ast::*;
    use crate::query::parser::parse;
    use crate::value::Value;

    #[test]
    fn test_concat_is_right_associative() {
        let Node::Binary(outer) = parse("a & b & c").expect("valid query") else {
            panic!("expected a binary node");
        };
        assert_eq!(outer.operator, BinaryOp::Concat);
        assert!(matches!(*outer.right, Node::Binary(_)));
    }

    #[test]
    fn test_long_chain_is_a_parse_error() {
        let error = parse(&format!("{}1", "1+".repeat(3000))).expect_err("chain too long");
        assert_eq!(error.reason, "expression nested too deeply");

        let text = format!("{}'z'", "'a' & ".repeat(100));
        assert!(parse(&text).is_ok());
    }

    #[test]
    fn test_ranges_and_arrays() {
        assert_eq!(parse("[1..3]"), Ok(Node::Range(RangeNode { start: 1, end: 3 })));
        assert_eq!(
            parse("['a', 2]"),
            Ok(Node::Array(ArrayNode {
                items: vec![
                    LiteralNode { value: Value::from("a") },
                    LiteralNode { value: Value::from(2_i64) },
                ]
            }))
        );
        assert_eq!(parse("[]"), Ok(Node::Array(ArrayNode { items: vec![] })));
    }

    #[test]
    fn test_array_elements_must_be_literals() {
        let error = parse("[1, a]").expect_err("a is not a literal");
        assert_eq!(error.offset, 4);
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let error = parse("a b").expect_err("two terms");
        assert_eq!(error.offset, 2);
    }
}
