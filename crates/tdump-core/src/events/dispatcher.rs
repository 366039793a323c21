//! Fan-out of events to any number of registered handlers.

use std::sync::Arc;

use super::handler::TdumpEventHandler;
use super::types::*;

#[derive(Default, Clone)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn TdumpEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn TdumpEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    fn each(&self, f: impl Fn(&dyn TdumpEventHandler)) {
        for handler in &self.handlers {
            f(handler.as_ref());
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl TdumpEventHandler for EventDispatcher {
    fn on_analysis_started(&self, event: &AnalysisStartedEvent) {
        self.each(|h| h.on_analysis_started(event));
    }
    fn on_header_recognized(&self, event: &HeaderRecognizedEvent) {
        self.each(|h| h.on_header_recognized(event));
    }
    fn on_state_inferred(&self, event: &StateInferredEvent) {
        self.each(|h| h.on_state_inferred(event));
    }
    fn on_line_dropped(&self, event: &LineDroppedEvent) {
        self.each(|h| h.on_line_dropped(event));
    }
    fn on_thread_sealed(&self, event: &ThreadSealedEvent) {
        self.each(|h| h.on_thread_sealed(event));
    }
    fn on_gc_classified(&self, event: &GcClassifiedEvent) {
        self.each(|h| h.on_gc_classified(event));
    }
    fn on_pools_grouped(&self, event: &PoolsGroupedEvent) {
        self.each(|h| h.on_pools_grouped(event));
    }
    fn on_deadlock_detected(&self, event: &DeadlockDetectedEvent) {
        self.each(|h| h.on_deadlock_detected(event));
    }
    fn on_analysis_complete(&self, event: &AnalysisCompleteEvent) {
        self.each(|h| h.on_analysis_complete(event));
    }
}
