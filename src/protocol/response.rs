//! Response error classification
//!
//! The server reuses the status-line position for failures. A line that did
//! not match the caller's expected success word is looked up here.

use thiserror::Error;

/// Failure reported by the server, or a reply the client could not make sense of
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("bad command format")]
    BadFormat,

    #[error("buried")]
    Buried,

    #[error("deadline soon")]
    DeadlineSoon,

    #[error("draining")]
    Draining,

    #[error("internal error")]
    Internal,

    #[error("job too big")]
    JobTooBig,

    #[error("expected CR LF")]
    NoCrlf,

    #[error("not found")]
    NotFound,

    #[error("not ignored")]
    NotIgnored,

    #[error("server is out of memory")]
    OutOfMemory,

    #[error("timeout")]
    TimedOut,

    #[error("unknown command")]
    UnknownCommand,

    /// Neither the expected success shape nor a reserved word; holds the raw line
    #[error("unknown response: {0}")]
    UnknownResponse(String),
}

impl ResponseError {
    /// The reserved status word for this kind, if it has one
    pub fn status_word(&self) -> Option<&'static str> {
        let word = match self {
            ResponseError::BadFormat => "BAD_FORMAT",
            ResponseError::Buried => "BURIED",
            ResponseError::DeadlineSoon => "DEADLINE_SOON",
            ResponseError::Draining => "DRAINING",
            ResponseError::Internal => "INTERNAL_ERROR",
            ResponseError::JobTooBig => "JOB_TOO_BIG",
            ResponseError::NoCrlf => "EXPECTED_CRLF",
            ResponseError::NotFound => "NOT_FOUND",
            ResponseError::NotIgnored => "NOT_IGNORED",
            ResponseError::OutOfMemory => "OUT_OF_MEMORY",
            ResponseError::TimedOut => "TIMED_OUT",
            ResponseError::UnknownCommand => "UNKNOWN_COMMAND",
            ResponseError::UnknownResponse(_) => return None,
        };
        Some(word)
    }
}

/// Map a full response line onto an error kind
///
/// Matching is exact and case-sensitive. Anything else comes back as
/// `UnknownResponse` with the line untouched.
pub fn classify(line: &str) -> ResponseError {
    match line {
        "BAD_FORMAT" => ResponseError::BadFormat,
        "BURIED" => ResponseError::Buried,
        "DEADLINE_SOON" => ResponseError::DeadlineSoon,
        "DRAINING" => ResponseError::Draining,
        "INTERNAL_ERROR" => ResponseError::Internal,
        "JOB_TOO_BIG" => ResponseError::JobTooBig,
        "EXPECTED_CRLF" => ResponseError::NoCrlf,
        "NOT_FOUND" => ResponseError::NotFound,
        "NOT_IGNORED" => ResponseError::NotIgnored,
        "OUT_OF_MEMORY" => ResponseError::OutOfMemory,
        "TIMED_OUT" => ResponseError::TimedOut,
        "UNKNOWN_COMMAND" => ResponseError::UnknownCommand,
        _ => ResponseError::UnknownResponse(line.to_string()),
    }
}
