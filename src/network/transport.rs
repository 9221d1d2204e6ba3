//! Transport
//!
//! The byte stream a connection runs over, and TCP dialing.

use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Result, StalkError};

/// A reliable, ordered, bidirectional byte stream
pub trait Transport: Read + Write {
    /// Tear the stream down. In-flight requests are not flushed or answered.
    fn close(&mut self) -> io::Result<()>;
}

impl Transport for TcpStream {
    fn close(&mut self) -> io::Result<()> {
        match self.shutdown(Shutdown::Both) {
            // Peer already hung up
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            other => other,
        }
    }
}

fn millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}

/// Open a TCP connection as described by `config`
///
/// Every resolved address is tried in turn; the last failure is returned if
/// none accepts.
pub fn dial(config: &Config) -> Result<TcpStream> {
    let addrs: Vec<_> = config.addr.to_socket_addrs()?.collect();
    if addrs.is_empty() {
        return Err(StalkError::Config(format!(
            "address {} did not resolve",
            config.addr
        )));
    }

    let mut last_err = None;
    for addr in addrs {
        let attempt = match millis(config.dial_timeout_ms) {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
            None => TcpStream::connect(addr),
        };
        match attempt {
            Ok(stream) => {
                stream.set_nodelay(config.nodelay)?;
                stream.set_read_timeout(millis(config.read_timeout_ms))?;
                stream.set_write_timeout(millis(config.write_timeout_ms))?;
                tracing::debug!("Connected to {} ({})", config.addr, addr);
                return Ok(stream);
            }
            Err(e) => {
                tracing::debug!("Dial {} failed: {}", addr, e);
                last_err = Some(e);
            }
        }
    }

    Err(last_err
        .map(StalkError::Io)
        .unwrap_or_else(|| StalkError::Config(format!("no address for {}", config.addr))))
}
