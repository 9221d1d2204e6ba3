//! Command definitions
//!
//! Represents commands sent to the server.

use std::time::Duration;

/// A command, ready to be encoded onto the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    // -------------------------------------------------------------------------
    // Tube selection (emitted by session reconciliation)
    // -------------------------------------------------------------------------
    /// Select the tube new jobs are put into
    Use { tube: String },

    /// Add a tube to the watch list
    Watch { tube: String },

    /// Remove a tube from the watch list
    Ignore { tube: String },

    // -------------------------------------------------------------------------
    // Producer commands
    // -------------------------------------------------------------------------
    Put {
        pri: u32,
        delay: Duration,
        ttr: Duration,
        body: &'a [u8],
    },

    // -------------------------------------------------------------------------
    // Worker commands
    // -------------------------------------------------------------------------
    ReserveWithTimeout { timeout: Duration },
    ReserveJob { id: u64 },
    Delete { id: u64 },
    Release { id: u64, pri: u32, delay: Duration },
    Bury { id: u64, pri: u32 },
    Touch { id: u64 },

    // -------------------------------------------------------------------------
    // Inspection and admin commands
    // -------------------------------------------------------------------------
    Peek { id: u64 },
    PeekReady,
    PeekDelayed,
    PeekBuried,
    Kick { bound: u64 },
    KickJob { id: u64 },
    Stats,
    StatsJob { id: u64 },
    StatsTube { tube: String },
    ListTubes,
    ListTubesWatched,
    PauseTube { tube: String, delay: Duration },
}

impl Command<'_> {
    /// The literal command word, also used to label errors
    pub fn word(&self) -> &'static str {
        match self {
            Command::Use { .. } => "use",
            Command::Watch { .. } => "watch",
            Command::Ignore { .. } => "ignore",
            Command::Put { .. } => "put",
            Command::ReserveWithTimeout { .. } => "reserve-with-timeout",
            Command::ReserveJob { .. } => "reserve-job",
            Command::Delete { .. } => "delete",
            Command::Release { .. } => "release",
            Command::Bury { .. } => "bury",
            Command::Touch { .. } => "touch",
            Command::Peek { .. } => "peek",
            Command::PeekReady => "peek-ready",
            Command::PeekDelayed => "peek-delayed",
            Command::PeekBuried => "peek-buried",
            Command::Kick { .. } => "kick",
            Command::KickJob { .. } => "kick-job",
            Command::Stats => "stats",
            Command::StatsJob { .. } => "stats-job",
            Command::StatsTube { .. } => "stats-tube",
            Command::ListTubes => "list-tubes",
            Command::ListTubesWatched => "list-tubes-watched",
            Command::PauseTube { .. } => "pause-tube",
        }
    }

    /// Tube name argument, written right after the command word
    pub fn tube(&self) -> Option<&str> {
        match self {
            Command::Use { tube }
            | Command::Watch { tube }
            | Command::Ignore { tube }
            | Command::StatsTube { tube }
            | Command::PauseTube { tube, .. } => Some(tube),
            _ => None,
        }
    }

    /// Numeric arguments in wire order
    pub fn args(&self) -> Vec<u64> {
        match *self {
            Command::Put { pri, delay, ttr, .. } => {
                vec![u64::from(pri), secs(delay), secs(ttr)]
            }
            Command::ReserveWithTimeout { timeout } => vec![secs(timeout)],
            Command::Release { id, pri, delay } => vec![id, u64::from(pri), secs(delay)],
            Command::Bury { id, pri } => vec![id, u64::from(pri)],
            Command::ReserveJob { id }
            | Command::Delete { id }
            | Command::Touch { id }
            | Command::Peek { id }
            | Command::KickJob { id }
            | Command::StatsJob { id } => vec![id],
            Command::Kick { bound } => vec![bound],
            Command::PauseTube { delay, .. } => vec![secs(delay)],
            _ => Vec::new(),
        }
    }

    /// Job body, for the one command that carries one
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            Command::Put { body, .. } => Some(*body),
            _ => None,
        }
    }
}

/// Durations travel as whole seconds, truncated
pub fn secs(d: Duration) -> u64 {
    d.as_secs()
}
