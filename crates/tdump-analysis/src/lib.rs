//! # tdump-analysis
//!
//! Analysis engine for textual thread dumps. Lines flow through the header
//! parser and thread assembler in order; the sealed thread list then feeds
//! three independent post-passes (GC classification, pool grouping, deadlock
//! detection) whose results land in one [`ThreadDumpAnalysis`].

pub mod analyzer;
pub mod deadlock;
pub mod gc;
pub mod model;
pub mod parser;
pub mod pools;

pub use analyzer::{parse_and_analyze, ThreadDumpAnalyzer};
pub use deadlock::annotator::LockAnnotator;
pub use gc::classifier::classify_gc_threads;
pub use model::{
    GcThreadAnalysis, LockInfo, Thread, ThreadDumpAnalysis, ThreadPool, ThreadRef,
};
pub use tdump_core::ThreadState;
