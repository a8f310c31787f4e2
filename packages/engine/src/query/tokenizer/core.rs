//! Core tokenizer types

use std::collections::VecDeque;

use crate::error::{QueryError, QueryResult, invalid_query_error};
use crate::query::tokens::{Spanned, Token};

/// Lexer over a query text
pub struct Tokenizer {
    pub(crate) input: String,
    pub(crate) tokens: VecDeque<Spanned>,
}

impl Tokenizer {
    /// Create a tokenizer for `input`
    #[inline]
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            tokens: VecDeque::new(),
        }
    }

    /// Tokenize the whole input, ending with `Token::Eof`
    ///
    /// # Errors
    ///
    /// Returns a `QueryError` at the offending character offset for
    /// unterminated strings, names or comments, malformed numbers and
    /// characters the language does not use.
    pub fn tokenize(mut self) -> QueryResult<VecDeque<Spanned>> {
        use super::{characters, comments, numbers, strings};

        let chars: Vec<char> = self.input.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            match chars[i] {
                ' ' | '\t' | '\n' | '\r' => {}
                '/' if chars.get(i + 1) == Some(&'*') => {
                    i = comments::skip_comment(&self, &chars, i)?;
                }
                '\'' | '"' => {
                    i = strings::parse_string_literal(&mut self, &chars, i)?;
                }
                '`' => {
                    i = strings::parse_quoted_name(&mut self, &chars, i)?;
                }
                c if c.is_ascii_digit() => {
                    i = numbers::parse_number_literal(&mut self, &chars, i)?;
                }
                '-' if chars.get(i + 1).is_some_and(char::is_ascii_digit) => {
                    i = numbers::parse_number_literal(&mut self, &chars, i)?;
                }
                _ => {
                    i = characters::parse_character_token(&mut self, &chars, i)?;
                }
            }
            i += 1;
        }

        self.push(Token::Eof, chars.len());
        Ok(self.tokens)
    }

    pub(crate) fn push(&mut self, token: Token, offset: usize) {
        self.tokens.push_back(Spanned { token, offset });
    }

    pub(crate) fn error(&self, reason: impl Into<String>, offset: usize) -> QueryError {
        invalid_query_error(&self.input, reason, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<Token> {
        Tokenizer::new(text)
            .tokenize()
            .expect("text should tokenize")
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn test_path_with_filter() {
        assert_eq!(
            kinds("Children[Name='child2'].Size"),
            vec![
                Token::Identifier("Children".into()),
                Token::LeftBracket,
                Token::Identifier("Name".into()),
                Token::Equal,
                Token::String("child2".into()),
                Token::RightBracket,
                Token::Dot,
                Token::Identifier("Size".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_ranges_numbers_and_keywords() {
        assert_eq!(
            kinds("[1..5] -2 2.5e1 and or in true null"),
            vec![
                Token::LeftBracket,
                Token::Integer(1),
                Token::DoubleDot,
                Token::Integer(5),
                Token::RightBracket,
                Token::Integer(-2),
                Token::Number(25.0),
                Token::And,
                Token::Or,
                Token::In,
                Token::True,
                Token::Null,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_backticks_and_variables() {
        assert_eq!(
            kinds("/* lead */ `first name` & $string( $ )"),
            vec![
                Token::Identifier("first name".into()),
                Token::Ampersand,
                Token::Variable("string".into()),
                Token::LeftParen,
                Token::Variable(String::new()),
                Token::RightParen,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_offsets_are_character_offsets() {
        let tokens = Tokenizer::new("é.b").tokenize().expect("text should tokenize");
        let offsets: Vec<usize> = tokens.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unterminated_comment() {
        let error = Tokenizer::new("a /* open").tokenize().expect_err("comment is open");
        assert_eq!(error.offset, 2);
    }

    #[test]
    fn test_unexpected_character() {
        let error = Tokenizer::new("a # b").tokenize().expect_err("# is not a token");
        assert_eq!(error.offset, 2);
    }
}
