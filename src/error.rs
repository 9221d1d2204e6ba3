//! Error types for Stalkwire
//!
//! Provides a unified error type for all client operations.

use thiserror::Error;

use crate::name::NameError;
use crate::protocol::ResponseError;

/// Result type alias using StalkError
pub type Result<T> = std::result::Result<T, StalkError>;

/// Unified error type for Stalkwire operations
#[derive(Debug, Error)]
pub enum StalkError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// I/O failure outside of a command cycle (dial, close)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O failure while a command was being written or its reply read.
    /// The connection should be closed after this.
    #[error("{op}: IO error: {source}")]
    Transport {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    /// The server answered with something other than the expected success line
    #[error("{op}: {kind}")]
    Response {
        op: &'static str,
        kind: ResponseError,
        /// Job id reported alongside the failure (`BURIED <id>` after `put`)
        id: Option<u64>,
    },

    // -------------------------------------------------------------------------
    // Client-side Validation Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Name(#[from] NameError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StalkError {
    pub(crate) fn response(op: &'static str, kind: ResponseError) -> Self {
        StalkError::Response { op, kind, id: None }
    }

    pub(crate) fn transport(op: &'static str, source: std::io::Error) -> Self {
        StalkError::Transport { op, source }
    }

    /// The server-reported error kind, if this is a protocol error
    pub fn kind(&self) -> Option<&ResponseError> {
        match self {
            StalkError::Response { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Job id the server attached to the failure, if any
    pub fn job_id(&self) -> Option<u64> {
        match self {
            StalkError::Response { id, .. } => *id,
            _ => None,
        }
    }

    /// The command word that triggered the error
    pub fn op(&self) -> Option<&'static str> {
        match self {
            StalkError::Response { op, .. } | StalkError::Transport { op, .. } => Some(*op),
            _ => None,
        }
    }

    /// True when the byte stream failed; the connection is no longer usable
    pub fn is_transport(&self) -> bool {
        matches!(self, StalkError::Transport { .. } | StalkError::Io(_))
    }
}
