//! Punctuation, operator, keyword and name tokenization

use super::core::Tokenizer;
use crate::error::QueryResult;
use crate::query::tokens::Token;

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn keyword(name: &str) -> Option<Token> {
    match name {
        "and" => Some(Token::And),
        "or" => Some(Token::Or),
        "in" => Some(Token::In),
        "true" => Some(Token::True),
        "false" => Some(Token::False),
        "null" => Some(Token::Null),
        _ => None,
    }
}

fn name_end(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && is_name_char(chars[i]) {
        i += 1;
    }
    i
}

/// Parse a single- or double-character token, keyword, name or `$` variable
pub(crate) fn parse_character_token(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    i: usize,
) -> QueryResult<usize> {
    let next = chars.get(i + 1).copied();
    let (token, last) = match chars[i] {
        '.' if next == Some('.') => (Token::DoubleDot, i + 1),
        '.' => (Token::Dot, i),
        '[' => (Token::LeftBracket, i),
        ']' => (Token::RightBracket, i),
        '(' => (Token::LeftParen, i),
        ')' => (Token::RightParen, i),
        ',' => (Token::Comma, i),
        ':' => (Token::Colon, i),
        '+' => (Token::Plus, i),
        '&' => (Token::Ampersand, i),
        '=' => (Token::Equal, i),
        '!' if next == Some('=') => (Token::NotEqual, i + 1),
        '<' if next == Some('=') => (Token::LessEq, i + 1),
        '<' => (Token::Less, i),
        '>' if next == Some('=') => (Token::GreaterEq, i + 1),
        '>' => (Token::Greater, i),
        '$' => {
            let end = name_end(chars, i + 1);
            let name: String = chars[i + 1..end].iter().collect();
            (Token::Variable(name), end - 1)
        }
        c if is_name_start(c) => {
            let end = name_end(chars, i);
            let name: String = chars[i..end].iter().collect();
            let token = keyword(&name).unwrap_or(Token::Identifier(name));
            (token, end - 1)
        }
        c => {
            return Err(tokenizer.error(format!("unexpected character '{c}'"), i));
        }
    };
    tokenizer.push(token, i);
    Ok(last)
}
