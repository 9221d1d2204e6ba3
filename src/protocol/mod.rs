//! Protocol Module
//!
//! Encoding and decoding for the beanstalk text protocol.
//!
//! ## Protocol Format
//!
//! ### Request Format
//! ```text
//! <word>[ <tube>][ <int>]*[ <len>]\r\n
//! [<len bytes of body>\r\n]
//! ```
//!
//! ### Response Format
//! ```text
//! <WORD>[ <int>]*\r\n              success, no body
//! <WORD>[ <int>]* <len>\r\n        success, body follows
//! <len bytes of body>\r\n
//! <ERROR_WORD>\r\n                 failure
//! ```
//!
//! ### Reconciliation Acknowledgements
//! - `USING <tube>`   reply to `use`
//! - `WATCHING <n>`   reply to `watch` / `ignore`
//!
//! These are skipped by the connection and never reach the caller.

mod command;
mod codec;
mod status;
mod response;
mod block;

pub use command::{secs, Command};
pub use codec::{encode_command, CRLF};
pub use status::{parse_size, parse_uint, scan, MAX_BODY_LEN};
pub use response::{classify, ResponseError};
pub use block::{parse_list, parse_stats, BLOCK_MARKER};

/// Acknowledgement prefix for `use`
pub const USING: &str = "USING ";

/// Acknowledgement prefix for `watch` and `ignore`
pub const WATCHING: &str = "WATCHING ";

/// True for lines that acknowledge a reconciliation command
pub fn is_acknowledgement(line: &str) -> bool {
    line.starts_with(USING) || line.starts_with(WATCHING)
}
