//! Session Tests
//!
//! Tube-selection reconciliation without a connection.
