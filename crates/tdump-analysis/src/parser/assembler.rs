//! Stateful assembly of thread records from dump lines.
//!
//! Two states: idle (no thread open) and open (collecting stack lines for one
//! thread). A header line seals whatever is open and opens a new record; end
//! of input seals the last one. Lines must be fed in dump order.

use tdump_core::events::handler::TdumpEventHandler;
use tdump_core::events::types::{
    HeaderRecognizedEvent, LineDroppedEvent, StateInferredEvent, ThreadSealedEvent,
};

use super::header::{parse_header, ThreadStub};
use super::state::state_from_frame;
use crate::deadlock::annotator::LockAnnotator;
use crate::model::{Thread, ThreadDumpAnalysis};

const DUMP_BANNER: &str = "Full thread dump";

enum AssemblerState {
    Idle,
    Open(Thread),
}

/// Line counters for one assembly run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyStats {
    pub lines_processed: usize,
    pub headers: usize,
    pub stack_lines: usize,
    pub skipped_lines: usize,
    pub dropped_lines: usize,
}

pub struct ThreadAssembler<'a> {
    state: AssemblerState,
    analysis: ThreadDumpAnalysis,
    stats: AssemblyStats,
    max_stack_depth: usize,
    handler: &'a dyn TdumpEventHandler,
    annotator: Option<&'a dyn LockAnnotator>,
}

impl<'a> ThreadAssembler<'a> {
    pub fn new(handler: &'a dyn TdumpEventHandler) -> Self {
        Self {
            state: AssemblerState::Idle,
            analysis: ThreadDumpAnalysis::new(),
            stats: AssemblyStats::default(),
            max_stack_depth: usize::MAX,
            handler,
            annotator: None,
        }
    }

    /// Cap on stored stack lines per thread.
    pub fn with_max_stack_depth(mut self, depth: usize) -> Self {
        self.max_stack_depth = depth;
        self
    }

    pub fn with_annotator(mut self, annotator: Option<&'a dyn LockAnnotator>) -> Self {
        self.annotator = annotator;
        self
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, AssemblerState::Open(_))
    }

    /// Consume one raw line.
    pub fn feed(&mut self, raw: &str) {
        self.stats.lines_processed += 1;
        let line_number = self.stats.lines_processed;
        let line = raw.trim();

        if line.is_empty() || line.starts_with(DUMP_BANNER) {
            self.stats.skipped_lines += 1;
            return;
        }

        if let Some(stub) = parse_header(line) {
            self.stats.headers += 1;
            tracing::trace!(
                line = line_number,
                format = stub.format.name(),
                thread = %stub.name,
                "recognized thread header"
            );
            self.handler.on_header_recognized(&HeaderRecognizedEvent {
                line_number,
                format: stub.format.name(),
                name: stub.name.clone(),
            });
            self.seal_open();
            self.state = AssemblerState::Open(open_thread(stub));
            return;
        }

        match &mut self.state {
            AssemblerState::Open(thread) => {
                self.stats.stack_lines += 1;
                if !thread.state.is_known() {
                    if let Some(state) = state_from_frame(line) {
                        thread.state = state;
                        tracing::trace!(
                            line = line_number,
                            thread = %thread.name,
                            state = %state,
                            "inferred state from stack line"
                        );
                        self.handler.on_state_inferred(&StateInferredEvent {
                            line_number,
                            thread: thread.name.clone(),
                            state,
                        });
                    }
                }
                if thread.stack_trace.len() < self.max_stack_depth {
                    thread.stack_trace.push(line.to_string());
                } else {
                    thread.omitted_frames += 1;
                }
            }
            AssemblerState::Idle => {
                self.stats.dropped_lines += 1;
                self.handler.on_line_dropped(&LineDroppedEvent { line_number });
            }
        }
    }

    /// Seal the open thread, if any, and hand back the assembled analysis.
    pub fn finish(mut self) -> (ThreadDumpAnalysis, AssemblyStats) {
        self.seal_open();
        tracing::debug!(
            lines = self.stats.lines_processed,
            threads = self.analysis.total_threads,
            dropped = self.stats.dropped_lines,
            "thread assembly complete"
        );
        (self.analysis, self.stats)
    }

    fn seal_open(&mut self) {
        let AssemblerState::Open(mut thread) =
            std::mem::replace(&mut self.state, AssemblerState::Idle)
        else {
            return;
        };
        if let Some(annotator) = self.annotator {
            thread.lock_info = annotator.annotate(&thread);
        }
        let event = ThreadSealedEvent {
            index: self.analysis.threads.len(),
            name: thread.name.clone(),
            state: thread.state,
            daemon: thread.daemon,
            stack_depth: thread.stack_trace.len(),
        };
        tracing::debug!(
            thread = %thread.name,
            state = %thread.state,
            daemon = thread.daemon,
            stack_lines = thread.stack_trace.len(),
            "sealed thread"
        );
        self.analysis.add_thread(thread);
        self.handler.on_thread_sealed(&event);
    }
}

fn open_thread(stub: ThreadStub) -> Thread {
    Thread {
        name: stub.name,
        id: stub.id,
        tid: stub.tid,
        priority: stub.priority,
        state: stub.state,
        daemon: stub.daemon,
        stack_trace: Vec::new(),
        omitted_frames: 0,
        lock_info: None,
    }
}
