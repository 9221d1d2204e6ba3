//! Stats and list block decoding
//!
//! `stats`, `stats-job`, `stats-tube` and the `list-*` commands answer with a
//! small YAML-like body:
//!
//! ```text
//! ---\n
//! current-jobs-ready: 4\n
//! version: 1.13\n
//! ```
//!
//! or, for lists:
//!
//! ```text
//! ---\n
//! - default\n
//! - emails\n
//! ```

use super::response::ResponseError;
use super::status::parse_uint;

/// Prefix introducing every stats and list body
pub const BLOCK_MARKER: &[u8] = b"---\n";

/// Separator between a field name and its value
const FIELD_SEPARATOR: &str = ": ";

/// Prefix on every list entry
const BULLET: &str = "- ";

fn unknown(text: &str) -> ResponseError {
    ResponseError::UnknownResponse(text.to_string())
}

fn block_text(data: &[u8]) -> Result<&str, ResponseError> {
    let data = data.strip_prefix(BLOCK_MARKER).unwrap_or(data);
    std::str::from_utf8(data)
        .map_err(|_| ResponseError::UnknownResponse(String::from_utf8_lossy(data).into_owned()))
}

/// Decode a stats block into numeric slots
///
/// `fields[i]` is the wire name stored in `slots[i]`. Names not in `fields`
/// are passed to `on_text` when given, and dropped otherwise. Every line must
/// end with a newline and contain `": "`.
pub fn parse_stats(
    data: &[u8],
    fields: &[&str],
    slots: &mut [u64],
    mut on_text: Option<&mut dyn FnMut(&str, &str)>,
) -> Result<(), ResponseError> {
    let mut rest = block_text(data)?;

    while !rest.is_empty() {
        let Some(eol) = rest.find('\n') else {
            return Err(unknown(rest));
        };
        let line = &rest[..eol];
        rest = &rest[eol + 1..];

        let Some((name, value)) = line.split_once(FIELD_SEPARATOR) else {
            return Err(unknown(line));
        };

        if let Some(slot) = fields.iter().position(|field| *field == name) {
            slots[slot] = parse_uint(value).ok_or_else(|| unknown(line))?;
        } else if let Some(handler) = on_text.as_deref_mut() {
            handler(name, value);
        }
    }

    Ok(())
}

/// Decode a list block
///
/// `None` means no body was read at all and stays `None`; an empty body
/// yields an empty list.
pub fn parse_list(data: Option<&[u8]>) -> Option<Vec<String>> {
    let data = data?;
    let data = data.strip_prefix(BLOCK_MARKER).unwrap_or(data);
    let text = String::from_utf8_lossy(data);

    let mut items: Vec<String> = text
        .split('\n')
        .map(|line| line.strip_prefix(BULLET).unwrap_or(line).to_string())
        .collect();
    if items.last().is_some_and(|last| last.is_empty()) {
        items.pop();
    }

    Some(items)
}
