//! # Stalkwire
//!
//! A blocking client for the beanstalk work-queue protocol:
//! - Text command lines, length-framed binary job bodies
//! - Exact classification of server error words
//! - Typed decoding of `stats` blocks
//! - Transparent `use` / `watch` / `ignore` reconciliation before each command
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │               Tube / TubeSet / job commands                  │
//! │                (thin typed call sites)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Conn (protocol engine)                       │
//! │        send: reconcile → encode → write → flush              │
//! │        receive: skip acks → header → body                    │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌───────────────────┐
//!   │     Session     │               │     Protocol      │
//!   │ (used, watched) │               │ status / classify │
//!   └─────────────────┘               │   stats blocks    │
//!                                     └───────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::time::Duration;
//! use stalkwire::Conn;
//!
//! # fn main() -> stalkwire::Result<()> {
//! let mut conn = Conn::dial("127.0.0.1:11300")?;
//! let id = conn.tube("emails").put(b"hello", 1024, Duration::ZERO, Duration::from_secs(60))?;
//! let (reserved, body) = conn.tube_set(["emails"]).reserve(Duration::from_secs(5))?;
//! assert_eq!(body, b"hello");
//! conn.delete(reserved)?;
//! # let _ = id;
//! conn.close()
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod name;

pub mod protocol;
pub mod session;
pub mod network;
pub mod stats;

mod commands;
mod tube;
mod tube_set;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StalkError, Result};
pub use config::Config;
pub use name::{check_name, NameError, NameErrorKind};
pub use network::{Conn, Transport};
pub use protocol::ResponseError;
pub use session::{Session, DEFAULT_TUBE};
pub use stats::{JobStats, Stats, TubeStats};
pub use tube::Tube;
pub use tube_set::TubeSet;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stalkwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
