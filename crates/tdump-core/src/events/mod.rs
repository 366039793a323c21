//! Observer hooks for analysis runs.
//!
//! Handlers see what the engine does line by line without affecting the
//! returned analysis.

pub mod dispatcher;
pub mod handler;
pub mod types;
