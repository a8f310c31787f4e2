//! String literal and quoted-name tokenization
//!
//! Handles single- and double-quoted literals with JSON-style escapes,
//! including UTF-16 surrogate pairs, and backtick-quoted field names.

use super::core::Tokenizer;
use crate::error::QueryResult;
use crate::query::tokens::Token;

/// Parse a quoted string literal, returning the index of the closing quote
pub(crate) fn parse_string_literal(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    mut i: usize,
) -> QueryResult<usize> {
    let open = i;
    let quote = chars[i];
    i += 1;
    let mut value = String::new();

    while i < chars.len() {
        if chars[i] == quote {
            break;
        } else if chars[i] == '\\' && i + 1 < chars.len() {
            i += 1;
            match chars[i] {
                '"' => value.push('"'),
                '\'' => value.push('\''),
                '\\' => value.push('\\'),
                '/' => value.push('/'),
                'b' => value.push('\u{0008}'),
                'f' => value.push('\u{000C}'),
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'u' => {
                    i = parse_unicode_escape(tokenizer, chars, i, &mut value)?;
                }
                _ => return Err(tokenizer.error("invalid escape sequence", i - 1)),
            }
        } else {
            value.push(chars[i]);
        }
        i += 1;
    }

    if i >= chars.len() {
        return Err(tokenizer.error("unterminated string literal", open));
    }

    tokenizer.push(Token::String(value), open);
    Ok(i)
}

/// Parse a backtick-quoted name; the content is taken verbatim
pub(crate) fn parse_quoted_name(
    tokenizer: &mut Tokenizer,
    chars: &[char],
    i: usize,
) -> QueryResult<usize> {
    let open = i;
    let Some(len) = chars[i + 1..].iter().position(|c| *c == '`') else {
        return Err(tokenizer.error("unterminated quoted name", open));
    };
    let close = open + 1 + len;
    let name: String = chars[open + 1..close].iter().collect();
    tokenizer.push(Token::Identifier(name), open);
    Ok(close)
}

fn hex_at(chars: &[char], at: usize) -> Option<u32> {
    let digits: String = chars.get(at..at + 4)?.iter().collect();
    u32::from_str_radix(&digits, 16).ok()
}

/// Parse `\uXXXX` (i at the `u`), returning the index of the last hex digit
fn parse_unicode_escape(
    tokenizer: &Tokenizer,
    chars: &[char],
    i: usize,
    value: &mut String,
) -> QueryResult<usize> {
    let Some(code_point) = hex_at(chars, i + 1) else {
        return Err(tokenizer.error("invalid unicode escape sequence", i - 1));
    };

    if (0xD800..=0xDBFF).contains(&code_point) {
        // High surrogate must be followed by \u and a low surrogate
        let low = match (chars.get(i + 5), chars.get(i + 6)) {
            (Some('\\'), Some('u')) => hex_at(chars, i + 7),
            _ => None,
        };
        return match low {
            Some(low) if (0xDC00..=0xDFFF).contains(&low) => {
                let scalar = 0x10000 + ((code_point - 0xD800) << 10) + (low - 0xDC00);
                let c = char::from_u32(scalar)
                    .ok_or_else(|| tokenizer.error("invalid surrogate pair", i - 1))?;
                value.push(c);
                Ok(i + 10)
            }
            _ => Err(tokenizer.error("high surrogate without low surrogate", i - 1)),
        };
    }

    match char::from_u32(code_point) {
        Some(c) => {
            value.push(c);
            Ok(i + 4)
        }
        None => Err(tokenizer.error("invalid unicode code point", i - 1)),
    }
}

#[cfg(test)]
mod tests {
    use crate::query::tokenizer::Tokenizer;
    use crate::query::tokens::Token;

    fn first(text: &str) -> Token {
        Tokenizer::new(text)
            .tokenize()
            .expect("text should tokenize")
            .pop_front()
            .map(|s| s.token)
            .expect("at least one token")
    }

    #[test]
    fn test_escapes() {
        assert_eq!(first(r#""a\"b\n""#), Token::String("a\"b\n".into()));
        assert_eq!(first(r"'it\'s'"), Token::String("it's".into()));
        assert_eq!(first(r#""é😀""#), Token::String("é😀".into()));
    }

    #[test]
    fn test_unterminated_string_reports_opening_quote() {
        let error = Tokenizer::new("Name = 'abc").tokenize().expect_err("string is open");
        assert_eq!(error.offset, 7);
        assert_eq!(error.reason, "unterminated string literal");
    }

    #[test]
    fn test_backtick_names_keep_punctuation() {
        assert_eq!(first("`a.b [c]`"), Token::Identifier("a.b [c]".into()));
        assert!(Tokenizer::new("`open").tokenize().is_err());
    }
}
