//! Shared vocabulary types.

pub mod collections;
pub mod thread_state;
