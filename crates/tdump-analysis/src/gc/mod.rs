//! Garbage-collector thread detection and categorization.

pub mod classifier;

pub use classifier::{classify_gc_threads, determine_gc_type, is_gc_thread};
