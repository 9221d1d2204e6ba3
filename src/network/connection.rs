//! Connection
//!
//! The protocol engine: one command in flight at a time, with the session's
//! reconciliation commands written ahead of it and their acknowledgements
//! skipped on the way back.

use std::collections::BTreeSet;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::net::TcpStream;

use bytes::BytesMut;

use crate::config::Config;
use crate::error::{Result, StalkError};
use crate::protocol::{encode_command, is_acknowledgement, parse_size, scan, Command, CRLF};
use crate::session::Session;

use super::transport::{dial, Transport};

/// Token for a command that has been written and whose reply is pending
///
/// Consumed by exactly one read.
#[derive(Debug)]
#[must_use = "the reply must be read before the next command is sent"]
pub struct Request {
    op: &'static str,
}

impl Request {
    /// Command word the reply belongs to
    pub fn op(&self) -> &'static str {
        self.op
    }
}

/// A reply whose header has not been matched yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub op: &'static str,

    /// Header line, terminator and body length removed
    pub header: String,

    /// Body bytes, terminator removed; `None` when no body was expected
    pub body: Option<Vec<u8>>,
}

impl RawReply {
    /// Match the header against `word` and `count` integers
    pub fn scan(&self, word: &str, count: usize) -> Result<Vec<u64>> {
        scan(&self.header, word, count).map_err(|kind| StalkError::response(self.op, kind))
    }
}

/// A successfully matched reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    pub args: Vec<u64>,
    pub body: Option<Vec<u8>>,
}

impl Reply {
    /// First captured integer (job id, count), 0 if there is none
    pub fn first_arg(&self) -> u64 {
        self.args.first().copied().unwrap_or_default()
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body.unwrap_or_default()
    }
}

/// A connection to a beanstalk server
///
/// Owns the stream, an outbound buffer, a buffered reader, and the session's
/// tube selection. Use from one caller at a time; concurrent users need their
/// own connections.
pub struct Conn<S: Transport = TcpStream> {
    /// Stream, buffered for line reads; writes go through `get_mut`
    reader: BufReader<S>,

    /// Outbound bytes for the current command
    wbuf: BytesMut,

    /// Remembered tube selection
    session: Session,
}

impl Conn<TcpStream> {
    /// Connect to `addr` with the default configuration
    pub fn dial(addr: &str) -> Result<Self> {
        let config = Config::builder().addr(addr).build();
        Self::dial_with_config(&config)
    }

    /// Connect as described by `config`
    pub fn dial_with_config(config: &Config) -> Result<Self> {
        let stream = dial(config)?;
        Ok(Self::new(stream))
    }
}

impl<S: Transport> Conn<S> {
    /// Wrap an already open stream
    pub fn new(stream: S) -> Self {
        Self {
            reader: BufReader::new(stream),
            wbuf: BytesMut::with_capacity(128),
            session: Session::new(),
        }
    }

    /// Close the underlying stream
    pub fn close(self) -> Result<()> {
        tracing::debug!("Closing connection");
        self.reader.into_inner().close()?;
        Ok(())
    }

    /// Tube the server currently puts new jobs into
    pub fn used(&self) -> &str {
        self.session.used()
    }

    /// Tubes the server currently reserves from
    pub fn watched(&self) -> &BTreeSet<String> {
        self.session.watched()
    }

    /// Borrow the underlying stream
    pub fn get_ref(&self) -> &S {
        self.reader.get_ref()
    }

    // =========================================================================
    // Write Path
    // =========================================================================

    /// Write `command`, preceded by whatever `use` / `watch` / `ignore`
    /// commands are needed to reach `used` and `watched`
    ///
    /// Name validation happens before anything is written. Nothing is retried.
    pub fn send(
        &mut self,
        command: &Command<'_>,
        used: Option<&str>,
        watched: Option<&BTreeSet<String>>,
    ) -> Result<Request> {
        let op = command.word();
        let prelude = self.session.reconcile(used, watched)?;

        self.wbuf.clear();
        for extra in &prelude {
            tracing::trace!("-> {} {}", extra.word(), extra.tube().unwrap_or_default());
            encode_command(&mut self.wbuf, extra);
        }
        encode_command(&mut self.wbuf, command);
        tracing::trace!("-> {} {:?}", op, command.args());

        let stream = self.reader.get_mut();
        stream
            .write_all(&self.wbuf)
            .and_then(|()| stream.flush())
            .map_err(|e| StalkError::transport(op, e))?;

        Ok(Request { op })
    }

    // =========================================================================
    // Read Path
    // =========================================================================

    /// Read one line, terminator removed
    fn read_line(&mut self, op: &'static str) -> Result<String> {
        let mut line = Vec::with_capacity(64);
        self.reader
            .read_until(b'\n', &mut line)
            .map_err(|e| StalkError::transport(op, e))?;

        if line.pop() != Some(b'\n') {
            return Err(StalkError::transport(
                op,
                io::Error::new(io::ErrorKind::UnexpectedEof, "connection closed mid-line"),
            ));
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        Ok(String::from_utf8_lossy(&line).into_owned())
    }

    /// Read the reply to `request` without interpreting the header
    ///
    /// Acknowledgements of reconciliation commands are skipped. With
    /// `expects_body`, the trailing length is split off the header and the
    /// body is read in full, terminator included, before anything else.
    pub fn receive_raw(&mut self, request: Request, expects_body: bool) -> Result<RawReply> {
        let op = request.op;

        let mut line = self.read_line(op)?;
        while is_acknowledgement(&line) {
            tracing::trace!("<- {} (skipped)", line);
            line = self.read_line(op)?;
        }
        tracing::trace!("<- {}", line);

        if !expects_body {
            return Ok(RawReply {
                op,
                header: line,
                body: None,
            });
        }

        let (header, size) = parse_size(&line).map_err(|kind| StalkError::response(op, kind))?;

        // Grow with the bytes actually received rather than trusting the length
        let want = size as u64 + CRLF.len() as u64;
        let mut body = Vec::with_capacity(size.min(64 * 1024) + CRLF.len());
        let read = match (&mut self.reader).take(want).read_to_end(&mut body) {
            Ok(n) if n as u64 == want => Ok(()),
            Ok(_) => Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "connection closed mid-body",
            )),
            Err(e) => Err(e),
        };
        if let Err(e) = read {
            tracing::warn!("{}: body read failed, connection framing lost: {}", op, e);
            return Err(StalkError::transport(op, e));
        }
        body.truncate(size);

        Ok(RawReply {
            op,
            header: header.to_string(),
            body: Some(body),
        })
    }

    /// Read the reply to `request` and match it against `word` followed by
    /// `count` integers
    pub fn receive(
        &mut self,
        request: Request,
        expects_body: bool,
        word: &str,
        count: usize,
    ) -> Result<Reply> {
        let raw = self.receive_raw(request, expects_body)?;
        let args = raw.scan(word, count)?;
        Ok(Reply {
            args,
            body: raw.body,
        })
    }

    /// Send a command that needs no tube selection and read its reply
    pub(crate) fn round_trip(
        &mut self,
        command: &Command<'_>,
        expects_body: bool,
        word: &str,
        count: usize,
    ) -> Result<Reply> {
        let request = self.send(command, None, None)?;
        self.receive(request, expects_body, word, count)
    }
}
