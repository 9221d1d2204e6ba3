//! Tube name validation
//!
//! Names are checked before any `use`, `watch` or `ignore` command is written.

use thiserror::Error;

/// Characters allowed in a tube name
pub const NAME_CHARS: &str =
    "\\-+/;.$_()0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Names must be strictly shorter than this many bytes
pub const MAX_NAME_LEN: usize = 200;

/// How a name was malformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameErrorKind {
    #[error("name is empty")]
    Empty,

    #[error("name is too long")]
    TooLong,

    /// Contains a character outside NAME_CHARS
    #[error("name has bad char")]
    BadChar,
}

/// A rejected tube name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {name}")]
pub struct NameError {
    pub name: String,
    pub kind: NameErrorKind,
}

impl NameError {
    fn new(name: &str, kind: NameErrorKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

/// Check that `name` is acceptable to the server
pub fn check_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::new(name, NameErrorKind::Empty));
    }
    if name.len() >= MAX_NAME_LEN {
        return Err(NameError::new(name, NameErrorKind::TooLong));
    }
    if !name.chars().all(|c| NAME_CHARS.contains(c)) {
        return Err(NameError::new(name, NameErrorKind::BadChar));
    }
    Ok(())
}
