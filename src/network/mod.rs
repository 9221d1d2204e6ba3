//! Network Module
//!
//! Byte transport and the protocol engine running over it.
//!
//! ## Architecture
//! - One blocking stream per connection
//! - One command/response cycle in flight at a time
//! - Tube selection reconciled before each command

mod transport;
mod connection;

pub use transport::{dial, Transport};
pub use connection::{Conn, RawReply, Reply, Request};
