//! Client test support utilities
//!
//! Shared helpers for the client's integration test binaries. Currently this is
//! the one-time logging bootstrap.

pub mod logging;
