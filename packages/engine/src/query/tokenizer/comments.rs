//! Block comment skipping

use super::core::Tokenizer;
use crate::error::QueryResult;

/// Skip `/* ... */` starting at `i`, returning the index of the closing `/`
pub(crate) fn skip_comment(tokenizer: &Tokenizer, chars: &[char], i: usize) -> QueryResult<usize> {
    let mut j = i + 2;
    while j + 1 < chars.len() {
        if chars[j] == '*' && chars[j + 1] == '/' {
            return Ok(j + 1);
        }
        j += 1;
    }
    Err(tokenizer.error("unterminated comment", i))
}
