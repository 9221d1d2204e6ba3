//! Connection-wide commands
//!
//! Commands addressed by job id or to the server as a whole. None of them
//! depend on the session's tube selection.

use std::time::Duration;

use crate::error::{Result, StalkError};
use crate::network::{Conn, Transport};
use crate::protocol::{parse_list, Command};
use crate::stats::{JobStats, Stats};

impl<S: Transport> Conn<S> {
    /// Delete a job
    pub fn delete(&mut self, id: u64) -> Result<()> {
        self.round_trip(&Command::Delete { id }, false, "DELETED", 0)?;
        Ok(())
    }

    /// Give a reserved job back: set its priority to `pri`, wait `delay`, then
    /// make it ready again
    pub fn release(&mut self, id: u64, pri: u32, delay: Duration) -> Result<()> {
        self.round_trip(&Command::Release { id, pri, delay }, false, "RELEASED", 0)?;
        Ok(())
    }

    /// Move a reserved job into its tube's holding area with priority `pri`
    ///
    /// It stays there until kicked.
    pub fn bury(&mut self, id: u64, pri: u32) -> Result<()> {
        self.round_trip(&Command::Bury { id, pri }, false, "BURIED", 0)?;
        Ok(())
    }

    /// Move a buried or delayed job back to the ready queue
    pub fn kick_job(&mut self, id: u64) -> Result<()> {
        self.round_trip(&Command::KickJob { id }, false, "KICKED", 0)?;
        Ok(())
    }

    /// Reset the reservation timer of a job reserved by this connection
    pub fn touch(&mut self, id: u64) -> Result<()> {
        self.round_trip(&Command::Touch { id }, false, "TOUCHED", 0)?;
        Ok(())
    }

    /// Get a copy of a job's body
    pub fn peek(&mut self, id: u64) -> Result<Vec<u8>> {
        let reply = self.round_trip(&Command::Peek { id }, true, "FOUND", 1)?;
        Ok(reply.into_body())
    }

    /// Reserve a specific job by id, regardless of the watched tubes
    pub fn reserve_job(&mut self, id: u64) -> Result<(u64, Vec<u8>)> {
        let reply = self.round_trip(&Command::ReserveJob { id }, true, "RESERVED", 1)?;
        Ok((reply.first_arg(), reply.into_body()))
    }

    /// Server-wide statistics
    pub fn stats(&mut self) -> Result<Stats> {
        let reply = self.round_trip(&Command::Stats, true, "OK", 0)?;
        Stats::decode(&reply.into_body()).map_err(|kind| StalkError::response("stats", kind))
    }

    /// Statistics for one job
    pub fn stats_job(&mut self, id: u64) -> Result<JobStats> {
        let reply = self.round_trip(&Command::StatsJob { id }, true, "OK", 0)?;
        JobStats::decode(&reply.into_body())
            .map_err(|kind| StalkError::response("stats-job", kind))
    }

    /// Names of all tubes that currently exist on the server
    pub fn list_tubes(&mut self) -> Result<Vec<String>> {
        let reply = self.round_trip(&Command::ListTubes, true, "OK", 0)?;
        Ok(parse_list(reply.body.as_deref()).unwrap_or_default())
    }

    /// Names of the tubes the server thinks this connection watches
    pub fn list_tubes_watched(&mut self) -> Result<Vec<String>> {
        let reply = self.round_trip(&Command::ListTubesWatched, true, "OK", 0)?;
        Ok(parse_list(reply.body.as_deref()).unwrap_or_default())
    }
}
