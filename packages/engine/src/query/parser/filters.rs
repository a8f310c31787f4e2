//! Filter conditions
//!
//! `or` binds looser than `and`, which binds looser than comparisons.
//! Operands may be literals, arrays, paths, function calls, `+`/`&`
//! arithmetic over those, or a parenthesized condition.

use super::core::Parser;
use crate::error::QueryResult;
use crate::query::ast::{BinaryNode, BinaryOp, Node};
use crate::query::tokens::Token;

fn binary(operator: BinaryOp, left: Node, right: Node, offset: usize) -> Node {
    Node::Binary(BinaryNode {
        operator,
        left: Box::new(left),
        right: Box::new(right),
        offset,
    })
}

impl Parser {
    /// Parse a full condition (lowest precedence)
    pub(super) fn parse_condition(&mut self) -> QueryResult<Node> {
        let mut left = self.parse_conjunction()?;
        let depth = self.depth;
        while matches!(self.peek_token(), Token::Or) {
            self.deepen()?;
            let offset = self.consume_token().offset;
            let right = self.parse_conjunction()?;
            left = binary(BinaryOp::Or, left, right, offset);
        }
        self.depth = depth;
        Ok(left)
    }

    fn parse_conjunction(&mut self) -> QueryResult<Node> {
        let mut left = self.parse_comparison()?;
        let depth = self.depth;
        while matches!(self.peek_token(), Token::And) {
            self.deepen()?;
            let offset = self.consume_token().offset;
            let right = self.parse_comparison()?;
            left = binary(BinaryOp::And, left, right, offset);
        }
        self.depth = depth;
        Ok(left)
    }

    fn parse_comparison(&mut self) -> QueryResult<Node> {
        let left = self.parse_operand()?;
        let operator = match self.peek_token() {
            Token::Equal => BinaryOp::Eq,
            Token::NotEqual => BinaryOp::NotEq,
            Token::Less => BinaryOp::Less,
            Token::LessEq => BinaryOp::LessEq,
            Token::Greater => BinaryOp::Greater,
            Token::GreaterEq => BinaryOp::GreaterEq,
            Token::In => BinaryOp::In,
            _ => return Ok(left),
        };
        let offset = self.consume_token().offset;
        let right = self.parse_operand()?;
        Ok(binary(operator, left, right, offset))
    }

    fn parse_operand(&mut self) -> QueryResult<Node> {
        let left = match self.peek_token() {
            Token::LeftParen => {
                self.consume_token();
                let inner = self.nested(Parser::parse_condition)?;
                self.expect_token(&Token::RightParen)?;
                inner
            }
            Token::LeftBracket => self.parse_array_or_range()?,
            token if token.is_literal() => Node::Literal(self.parse_literal()?),
            Token::Identifier(_) | Token::Variable(_) => self.parse_path()?,
            token => return Err(self.unexpected(token)),
        };
        let operator = match self.peek_token() {
            Token::Plus => BinaryOp::Add,
            Token::Ampersand => BinaryOp::Concat,
            _ => return Ok(left),
        };
        let offset = self.consume_token().offset;
        let right = self.nested(Parser::parse_operand)?;
        Ok(binary(operator, left, right, offset))
    }
}

#[cfg(test)]
mod tests {
    use crate::query::ast::*;
    use crate::query::parser::parse;

    fn condition(text: &str) -> Node {
        let Ok(Node::Path(path)) = parse(text) else {
            panic!("expected a path");
        };
        match path.steps[0].clauses.first() {
            Some(Clause::Filter(node)) => (**node).clone(),
            other => panic!("expected a filter, got {other:?}"),
        }
    }

    #[test]
    fn test_or_binds_looser_than_and() {
        let Node::Binary(top) = condition("a[x=1 and y=2 or z=3]") else {
            panic!("expected a binary node");
        };
        assert_eq!(top.operator, BinaryOp::Or);
        assert!(matches!(*top.left, Node::Binary(ref b) if b.operator == BinaryOp::And));
    }

    #[test]
    fn test_grouping_and_membership() {
        let Node::Binary(top) = condition("a[(x=1 or y=2) and Name in ['p', 'q']]") else {
            panic!("expected a binary node");
        };
        assert_eq!(top.operator, BinaryOp::And);
        assert!(matches!(*top.right, Node::Binary(ref b) if b.operator == BinaryOp::In));
    }

    #[test]
    fn test_arithmetic_operand() {
        let Node::Binary(top) = condition("a[Size + 1 > 2]") else {
            panic!("expected a binary node");
        };
        assert_eq!(top.operator, BinaryOp::Greater);
        assert!(matches!(*top.left, Node::Binary(ref b) if b.operator == BinaryOp::Add));
    }

    #[test]
    fn test_long_conjunction_is_a_parse_error() {
        let text = format!("a[{}x=1]", "x=1 and ".repeat(500));
        let error = parse(&text).expect_err("conjunction too long");
        assert_eq!(error.reason, "expression nested too deeply");

        let Node::Binary(top) = condition("a[x=1 and y=2 and z=3 or w=4]") else {
            panic!("expected a binary node");
        };
        assert_eq!(top.operator, BinaryOp::Or);
    }

    #[test]
    fn test_missing_operand() {
        let error = parse("a[x = ]").expect_err("right operand missing");
        assert_eq!(error.offset, 6);
    }
}
