//! The observer trait. Every method has a no-op default.

use super::types::*;

pub trait TdumpEventHandler: Send + Sync {
    fn on_analysis_started(&self, _event: &AnalysisStartedEvent) {}
    fn on_header_recognized(&self, _event: &HeaderRecognizedEvent) {}
    fn on_state_inferred(&self, _event: &StateInferredEvent) {}
    fn on_line_dropped(&self, _event: &LineDroppedEvent) {}
    fn on_thread_sealed(&self, _event: &ThreadSealedEvent) {}
    fn on_gc_classified(&self, _event: &GcClassifiedEvent) {}
    fn on_pools_grouped(&self, _event: &PoolsGroupedEvent) {}
    fn on_deadlock_detected(&self, _event: &DeadlockDetectedEvent) {}
    fn on_analysis_complete(&self, _event: &AnalysisCompleteEvent) {}
}

/// Handler that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl TdumpEventHandler for NoOpHandler {}
