//! Protocol codec
//!
//! Encoding of command lines onto an outbound buffer.
//!
//! ## Wire Format
//!
//! ### Command Line
//! ```text
//! ┌────────┬──────────────┬──────────────┬────────────────┬──────┐
//! │  word  │ [ SP tube ]  │ [ SP int ]*  │ [ SP len ]     │ CRLF │
//! └────────┴──────────────┴──────────────┴────────────────┴──────┘
//! ```
//!
//! ### Command With Body (`put`)
//! ```text
//! put <pri> <delay> <ttr> <len> CRLF
//! <len raw bytes> CRLF
//! ```

use bytes::{BufMut, BytesMut};

use super::Command;

/// Line terminator on every command and response header line
pub const CRLF: &[u8] = b"\r\n";

/// Encode one command onto `buf`
///
/// The body, when present, is framed by its byte length and followed by the
/// terminator that closes the command.
pub fn encode_command(buf: &mut BytesMut, command: &Command<'_>) {
    buf.put_slice(command.word().as_bytes());

    if let Some(tube) = command.tube() {
        buf.put_u8(b' ');
        buf.put_slice(tube.as_bytes());
    }

    for arg in command.args() {
        buf.put_u8(b' ');
        buf.put_slice(arg.to_string().as_bytes());
    }

    if let Some(body) = command.body() {
        buf.put_u8(b' ');
        buf.put_slice(body.len().to_string().as_bytes());
        buf.put_slice(CRLF);
        buf.put_slice(body);
    }

    buf.put_slice(CRLF);
}
