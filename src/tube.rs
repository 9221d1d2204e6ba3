//! Tube
//!
//! Commands that act on one named tube. Producing commands switch the
//! connection's used tube first when needed.

use std::time::Duration;

use crate::error::{Result, StalkError};
use crate::name::check_name;
use crate::network::{Conn, Transport};
use crate::protocol::{Command, ResponseError};
use crate::session::DEFAULT_TUBE;
use crate::stats::TubeStats;

/// Handle on tube `name` over a borrowed connection
pub struct Tube<'c, S: Transport> {
    conn: &'c mut Conn<S>,
    name: String,
}

impl<'c, S: Transport> Tube<'c, S> {
    pub fn new(conn: &'c mut Conn<S>, name: impl Into<String>) -> Self {
        Self {
            conn,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Put a job into this tube and return its id
    ///
    /// The job becomes ready after `delay`; once reserved, a worker has `ttr`
    /// to finish it. If the server buries the job because it ran out of memory
    /// growing its priority queue, the error carries the new job's id.
    pub fn put(&mut self, body: &[u8], pri: u32, delay: Duration, ttr: Duration) -> Result<u64> {
        let command = Command::Put {
            pri,
            delay,
            ttr,
            body,
        };
        let request = self.conn.send(&command, Some(self.name.as_str()), None)?;
        let raw = self.conn.receive_raw(request, false)?;

        match raw.scan("INSERTED", 1) {
            Ok(args) => Ok(args[0]),
            Err(inserted_err) => match raw.scan("BURIED", 1) {
                Ok(args) => Err(StalkError::Response {
                    op: raw.op,
                    kind: ResponseError::Buried,
                    id: Some(args[0]),
                }),
                Err(_) => Err(inserted_err),
            },
        }
    }

    fn peek_front(&mut self, command: Command<'_>) -> Result<(u64, Vec<u8>)> {
        let request = self.conn.send(&command, Some(self.name.as_str()), None)?;
        let reply = self.conn.receive(request, true, "FOUND", 1)?;
        Ok((reply.first_arg(), reply.into_body()))
    }

    /// The job at the front of the ready queue
    pub fn peek_ready(&mut self) -> Result<(u64, Vec<u8>)> {
        self.peek_front(Command::PeekReady)
    }

    /// The delayed job that becomes ready next
    pub fn peek_delayed(&mut self) -> Result<(u64, Vec<u8>)> {
        self.peek_front(Command::PeekDelayed)
    }

    /// The buried job that would be kicked next
    pub fn peek_buried(&mut self) -> Result<(u64, Vec<u8>)> {
        self.peek_front(Command::PeekBuried)
    }

    /// Move up to `bound` buried jobs back to the ready queue, oldest burial
    /// first. Returns how many moved.
    pub fn kick(&mut self, bound: u64) -> Result<u64> {
        let request = self.conn.send(&Command::Kick { bound }, Some(self.name.as_str()), None)?;
        let reply = self.conn.receive(request, false, "KICKED", 1)?;
        Ok(reply.first_arg())
    }

    /// Statistics for this tube
    pub fn stats(&mut self) -> Result<TubeStats> {
        check_name(&self.name)?;
        let command = Command::StatsTube {
            tube: self.name.clone(),
        };
        let reply = self.conn.round_trip(&command, true, "OK", 0)?;
        TubeStats::decode(&reply.into_body())
            .map_err(|kind| StalkError::response(command.word(), kind))
    }

    /// Stop handing out jobs from this tube for `delay`
    pub fn pause(&mut self, delay: Duration) -> Result<()> {
        check_name(&self.name)?;
        let command = Command::PauseTube {
            tube: self.name.clone(),
            delay,
        };
        self.conn.round_trip(&command, false, "PAUSED", 0)?;
        Ok(())
    }
}

impl<S: Transport> Conn<S> {
    /// Handle on tube `name`
    pub fn tube(&mut self, name: impl Into<String>) -> Tube<'_, S> {
        Tube::new(self, name)
    }

    /// Put a job into the `default` tube
    pub fn put(&mut self, body: &[u8], pri: u32, delay: Duration, ttr: Duration) -> Result<u64> {
        self.tube(DEFAULT_TUBE).put(body, pri, delay, ttr)
    }

    /// Peek at the next ready job in the `default` tube
    pub fn peek_ready(&mut self) -> Result<(u64, Vec<u8>)> {
        self.tube(DEFAULT_TUBE).peek_ready()
    }

    pub fn peek_delayed(&mut self) -> Result<(u64, Vec<u8>)> {
        self.tube(DEFAULT_TUBE).peek_delayed()
    }

    pub fn peek_buried(&mut self) -> Result<(u64, Vec<u8>)> {
        self.tube(DEFAULT_TUBE).peek_buried()
    }

    /// Kick buried jobs in the `default` tube
    pub fn kick(&mut self, bound: u64) -> Result<u64> {
        self.tube(DEFAULT_TUBE).kick(bound)
    }

    /// Pause the `default` tube
    pub fn pause(&mut self, delay: Duration) -> Result<()> {
        self.tube(DEFAULT_TUBE).pause(delay)
    }
}
