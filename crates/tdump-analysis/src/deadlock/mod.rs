//! Wait-for graph construction and cycle detection.

pub mod annotator;
pub mod detector;
pub mod graph;

pub use detector::{detect_deadlock, DeadlockReport};
pub use graph::WaitForGraph;
