//! Tube Set
//!
//! Reservation from a set of tubes. Before `reserve`, the connection's watch
//! list is made to match the set exactly.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::error::Result;
use crate::network::{Conn, Transport};
use crate::protocol::Command;
use crate::session::DEFAULT_TUBE;

/// Handle on a set of tubes over a borrowed connection
pub struct TubeSet<'c, S: Transport> {
    conn: &'c mut Conn<S>,
    names: BTreeSet<String>,
}

impl<'c, S: Transport> TubeSet<'c, S> {
    pub fn new<I, T>(conn: &'c mut Conn<S>, names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            conn,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Reserve a job from any tube in the set and return its id and body
    ///
    /// Waits up to `timeout` on the server side. A zero timeout returns at
    /// once; `TIMED_OUT` and `DEADLINE_SOON` come back as errors.
    pub fn reserve(&mut self, timeout: Duration) -> Result<(u64, Vec<u8>)> {
        let command = Command::ReserveWithTimeout { timeout };
        let request = self.conn.send(&command, None, Some(&self.names))?;
        let reply = self.conn.receive(request, true, "RESERVED", 1)?;
        Ok((reply.first_arg(), reply.into_body()))
    }
}

impl<S: Transport> Conn<S> {
    /// Handle on a set of tubes
    pub fn tube_set<I, T>(&mut self, names: I) -> TubeSet<'_, S>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        TubeSet::new(self, names)
    }

    /// Reserve a job from the `default` tube only
    pub fn reserve(&mut self, timeout: Duration) -> Result<(u64, Vec<u8>)> {
        self.tube_set([DEFAULT_TUBE]).reserve(timeout)
    }
}
