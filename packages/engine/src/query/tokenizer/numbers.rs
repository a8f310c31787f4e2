//! Number literal tokenization
//!
//! Integers that fit in `i64` become `Token::Integer`; anything with a
//! fraction, an exponent or out of integer range becomes `Token::Number`.
//! A `.` is only part of a number when a digit follows it, so `1..5` lexes
//! as a range.

use super::core::Tokenizer;
use crate::error::QueryResult;
use crate::query::tokens::Token;

fn digits_from(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}

/// Parse a number literal, returning the index of its last character
pub(crate) fn parse_number_literal(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    start: usize,
) -> QueryResult<usize> {
    let mut i = start;
    if chars[i] == '-' {
        i += 1;
    }
    i = digits_from(chars, i);

    let mut is_float = false;
    if chars.get(i) == Some(&'.') && chars.get(i + 1).is_some_and(char::is_ascii_digit) {
        is_float = true;
        i = digits_from(chars, i + 1);
    }

    if matches!(chars.get(i), Some('e' | 'E')) {
        let mut exp = i + 1;
        if matches!(chars.get(exp), Some('+' | '-')) {
            exp += 1;
        }
        if !chars.get(exp).is_some_and(char::is_ascii_digit) {
            return Err(tokenizer.error("exponent requires digits", i));
        }
        is_float = true;
        i = digits_from(chars, exp);
    }

    if chars.get(i).is_some_and(|c| c.is_alphabetic() || *c == '_') {
        return Err(tokenizer.error("invalid number literal", start));
    }

    let text: String = chars[start..i].iter().collect();
    let token = match (is_float, text.parse::<i64>()) {
        (false, Ok(n)) => Token::Integer(n),
        _ => Token::Number(
            text.parse::<f64>()
                .map_err(|_| tokenizer.error("invalid number literal", start))?,
        ),
    };
    tokenizer.push(token, start);
    Ok(i - 1)
}
