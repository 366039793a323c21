//! Event payloads passed to [`TdumpEventHandler`](super::handler::TdumpEventHandler).

use crate::types::thread_state::ThreadState;

#[derive(Debug, Clone)]
pub struct AnalysisStartedEvent {
    pub parallel_post_passes: bool,
}

/// A line opened a new thread record.
#[derive(Debug, Clone)]
pub struct HeaderRecognizedEvent {
    pub line_number: usize,
    pub format: &'static str,
    pub name: String,
}

/// A stack line resolved an UNKNOWN state.
#[derive(Debug, Clone)]
pub struct StateInferredEvent {
    pub line_number: usize,
    pub thread: String,
    pub state: ThreadState,
}

/// A non-header line arrived with no open thread.
#[derive(Debug, Clone)]
pub struct LineDroppedEvent {
    pub line_number: usize,
}

#[derive(Debug, Clone)]
pub struct ThreadSealedEvent {
    pub index: usize,
    pub name: String,
    pub state: ThreadState,
    pub daemon: bool,
    pub stack_depth: usize,
}

#[derive(Debug, Clone)]
pub struct GcClassifiedEvent {
    pub total_gc_threads: usize,
    pub categories: usize,
}

#[derive(Debug, Clone)]
pub struct PoolsGroupedEvent {
    pub pools: usize,
    pub pooled_threads: usize,
}

/// Thread ids of the first cycle found, in wait order. Empty when chain
/// reconstruction is disabled.
#[derive(Debug, Clone)]
pub struct DeadlockDetectedEvent {
    pub chain: Vec<u64>,
}

#[derive(Debug, Clone)]
pub struct AnalysisCompleteEvent {
    pub total_threads: usize,
    pub lines_processed: usize,
    pub deadlock_found: bool,
    pub duration_ms: u64,
}
