//! Path steps, bracket clauses and function calls

use super::core::Parser;
use crate::error::QueryResult;
use crate::query::ast::{Clause, FunctionNode, Node, PathNode, Step, StepKind};
use crate::query::tokens::Token;

impl Parser {
    /// Parse `step ('.' step)*`
    ///
    /// A lone parenthesized expression or function call without clauses is
    /// returned as its own node rather than a one-step path.
    pub(super) fn parse_path(&mut self) -> QueryResult<Node> {
        let mut steps = vec![self.parse_step()?];
        while matches!(self.peek_token(), Token::Dot) {
            self.consume_token();
            steps.push(self.parse_step()?);
        }

        if let [step] = steps.as_mut_slice()
            && step.clauses.is_empty()
        {
            match std::mem::replace(&mut step.kind, StepKind::Context) {
                StepKind::SubExpr(node) => return Ok(*node),
                StepKind::Function(call) => return Ok(Node::Function(call)),
                kind => step.kind = kind,
            }
        }
        Ok(Node::Path(PathNode { steps }))
    }

    fn parse_step(&mut self) -> QueryResult<Step> {
        let offset = self.offset();
        let kind = match self.peek_token() {
            Token::Identifier(name) => {
                let name = name.clone();
                self.consume_token();
                StepKind::Name(name)
            }
            Token::Variable(name) if name.is_empty() => {
                self.consume_token();
                StepKind::Context
            }
            Token::Variable(name) => {
                let name = name.clone();
                self.consume_token();
                if !matches!(self.peek_token(), Token::LeftParen) {
                    return Err(self.error(format!("expected '(' after ${name}"), self.offset()));
                }
                let args = self.nested(Parser::parse_call_args)?;
                StepKind::Function(FunctionNode { name, args, offset })
            }
            Token::LeftParen => {
                self.consume_token();
                let inner = self.nested(Parser::parse_expression)?;
                self.expect_token(&Token::RightParen)?;
                StepKind::SubExpr(Box::new(inner))
            }
            Token::Eof => return Err(self.unexpected(&Token::Eof)),
            _ => return Err(self.error("expected a field name", offset)),
        };

        let mut clauses = Vec::new();
        while matches!(self.peek_token(), Token::LeftBracket) {
            clauses.push(self.nested(Parser::parse_clause)?);
        }
        Ok(Step {
            kind,
            clauses,
            offset,
        })
    }

    fn parse_call_args(&mut self) -> QueryResult<Vec<Node>> {
        self.expect_token(&Token::LeftParen)?;
        let mut args = Vec::new();
        if !matches!(self.peek_token(), Token::RightParen) {
            loop {
                args.push(self.parse_expression()?);
                if !matches!(self.peek_token(), Token::Comma) {
                    break;
                }
                self.consume_token();
            }
        }
        self.expect_token(&Token::RightParen)?;
        Ok(args)
    }

    fn parse_clause(&mut self) -> QueryResult<Clause> {
        self.expect_token(&Token::LeftBracket)?;
        let clause = match (self.peek_token(), self.peek_nth(1)) {
            (Token::Integer(index), Token::RightBracket) => {
                let index = *index;
                self.consume_token();
                Clause::Index(index)
            }
            (Token::Colon, _) => {
                self.consume_token();
                Clause::Slice {
                    start: None,
                    end: self.parse_slice_bound(),
                }
            }
            (Token::Integer(start), Token::Colon) => {
                let start = *start;
                self.consume_token();
                self.consume_token();
                Clause::Slice {
                    start: Some(start),
                    end: self.parse_slice_bound(),
                }
            }
            _ => Clause::Filter(Box::new(self.parse_condition()?)),
        };
        self.expect_token(&Token::RightBracket)?;
        Ok(clause)
    }

    fn parse_slice_bound(&mut self) -> Option<i64> {
        match self.peek_token() {
            Token::Integer(n) => {
                let n = *n;
                self.consume_token();
                Some(n)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::query::ast::*;
    use crate::query::parser::parse;
    use crate::value::Value;

    fn steps(text: &str) -> Vec<Step> {
        match parse(text).expect("valid query") {
            Node::Path(path) => path.steps,
            other => panic!("expected a path, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_then_field() {
        let steps = steps("Children[Name='child2'].Size");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].kind, StepKind::Name("Children".into()));
        let Clause::Filter(condition) = &steps[0].clauses[0] else {
            panic!("expected a filter clause");
        };
        let Node::Binary(binary) = condition.as_ref() else {
            panic!("expected a comparison");
        };
        assert_eq!(binary.operator, BinaryOp::Eq);
        assert_eq!(*binary.right, Node::Literal(LiteralNode { value: Value::from("child2") }));
        assert_eq!(steps[1].kind, StepKind::Name("Size".into()));
        assert_eq!(steps[1].offset, 24);
    }

    #[test]
    fn test_index_and_slices() {
        let steps = steps("a[-1][1:3][:2][2:]");
        assert_eq!(
            steps[0].clauses,
            vec![
                Clause::Index(-1),
                Clause::Slice { start: Some(1), end: Some(3) },
                Clause::Slice { start: None, end: Some(2) },
                Clause::Slice { start: Some(2), end: None },
            ]
        );
    }

    #[test]
    fn test_lone_call_and_group_unwrap() {
        assert!(matches!(parse("$count(a)"), Ok(Node::Function(f)) if f.name == "count" && f.args.len() == 1));
        assert!(matches!(parse("(a)"), Ok(Node::Path(_))));
        assert!(matches!(parse("$"), Ok(Node::Path(p)) if p.steps[0].kind == StepKind::Context));
    }

    #[test]
    fn test_variable_without_call_rejected() {
        let error = parse("$x.y").expect_err("bare variables are not supported");
        assert_eq!(error.offset, 2);
    }

    #[test]
    fn test_unclosed_clause() {
        let error = parse("a[0").expect_err("clause is open");
        assert_eq!(error.offset, 3);
        assert_eq!(error.reason, "expected ']', found 'end of input'");
    }
}
