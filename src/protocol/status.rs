//! Status-line parsing
//!
//! A response header is either `WORD[ int]*`, a reserved error word, or, for
//! replies that carry a body, a line whose last token is the body length.

use super::response::{classify, ResponseError};

/// Largest body length accepted from the server
pub const MAX_BODY_LEN: u64 = isize::MAX as u64;

/// Parse an unsigned decimal token
///
/// Only ASCII digits are accepted (no sign, no whitespace) and the value must
/// fit in a `u64`.
pub fn parse_uint(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Match `line` against `word` followed by exactly `count` integers
///
/// A line that does not start with `word` is handed to the classifier, which
/// is how server-declared errors surface. A line that does start with `word`
/// but carries the wrong integers is an unknown response.
pub fn scan(line: &str, word: &str, count: usize) -> Result<Vec<u64>, ResponseError> {
    let rest = match line.strip_prefix(word) {
        Some(rest) if rest.is_empty() || rest.starts_with(' ') => rest,
        _ => return Err(classify(line)),
    };

    let unknown = || ResponseError::UnknownResponse(line.to_string());

    let mut args = Vec::with_capacity(count);
    let mut tokens = rest.split(' ').skip(1);
    for _ in 0..count {
        let n = tokens.next().and_then(parse_uint).ok_or_else(unknown)?;
        args.push(n);
    }
    if tokens.next().is_some() {
        return Err(unknown());
    }

    Ok(args)
}

/// Split the trailing body length off a header line
///
/// Returns the remaining header and the declared length. A line with no space
/// carries no length and is classified as a server error.
pub fn parse_size(line: &str) -> Result<(&str, usize), ResponseError> {
    let Some(space) = line.rfind(' ') else {
        return Err(classify(line));
    };

    let size = parse_uint(&line[space + 1..])
        .filter(|&n| n <= MAX_BODY_LEN)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| ResponseError::UnknownResponse(line.to_string()))?;

    Ok((&line[..space], size))
}
