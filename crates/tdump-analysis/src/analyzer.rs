//! Top-level pipeline: lines → assembler → sealed threads → post-passes.
//!
//! Parsing is strictly sequential. The three post-passes only read the sealed
//! thread list and write disjoint outputs, so they may run under `rayon::join`
//! when `analysis.parallel_post_passes` is set.

use std::io::BufRead;
use std::sync::Arc;
use std::time::Instant;

use tdump_core::config::TdumpConfig;
use tdump_core::errors::{AnalysisError, ConfigError};
use tdump_core::events::dispatcher::EventDispatcher;
use tdump_core::events::handler::TdumpEventHandler;
use tdump_core::events::types::{
    AnalysisCompleteEvent, AnalysisStartedEvent, DeadlockDetectedEvent, GcClassifiedEvent,
    PoolsGroupedEvent,
};

use crate::deadlock::annotator::LockAnnotator;
use crate::deadlock::detector::{detect_deadlock, DeadlockReport};
use crate::deadlock::graph::WaitForGraph;
use crate::gc::classifier::classify_gc_threads;
use crate::model::{GcThreadAnalysis, Thread, ThreadDumpAnalysis, ThreadPool, ThreadRef};
use crate::parser::assembler::{AssemblyStats, ThreadAssembler};
use crate::pools::grouper::group_thread_pools;

/// Configured analyzer. Cheap to build; holds no per-run state.
pub struct ThreadDumpAnalyzer {
    config: TdumpConfig,
    dispatcher: EventDispatcher,
    annotator: Option<Box<dyn LockAnnotator>>,
}

impl Default for ThreadDumpAnalyzer {
    fn default() -> Self {
        Self::with_valid_config(TdumpConfig::default())
    }
}

impl ThreadDumpAnalyzer {
    /// Build an analyzer after validating `config`.
    pub fn new(config: TdumpConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: TdumpConfig) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::new(),
            annotator: None,
        }
    }

    /// Register an observer. Observers never change the result.
    pub fn with_handler(mut self, handler: Arc<dyn TdumpEventHandler>) -> Self {
        self.dispatcher.register(handler);
        self
    }

    pub fn with_lock_annotator(mut self, annotator: Box<dyn LockAnnotator>) -> Self {
        self.annotator = Some(annotator);
        self
    }

    pub fn config(&self) -> &TdumpConfig {
        &self.config
    }

    /// Analyze an already-read dump. Never fails: malformed lines are attached
    /// to the open thread or dropped.
    pub fn parse_and_analyze<I, S>(&self, lines: I) -> ThreadDumpAnalysis
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started = self.start_run();
        let mut assembler = self.assembler();
        for line in lines {
            assembler.feed(line.as_ref());
        }
        self.complete_run(assembler, started)
    }

    pub fn analyze_str(&self, text: &str) -> ThreadDumpAnalysis {
        self.parse_and_analyze(text.lines())
    }

    /// Analyze a dump streamed from a reader. A read failure (including
    /// invalid UTF-8) aborts with [`AnalysisError::Io`].
    pub fn analyze_reader<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<ThreadDumpAnalysis, AnalysisError> {
        let started = self.start_run();
        let mut assembler = self.assembler();
        for line in reader.lines() {
            let line = line.map_err(|e| {
                tracing::warn!(error = %e, "failed to read thread dump input");
                e
            })?;
            assembler.feed(&line);
        }
        Ok(self.complete_run(assembler, started))
    }

    fn assembler(&self) -> ThreadAssembler<'_> {
        ThreadAssembler::new(&self.dispatcher)
            .with_max_stack_depth(self.config.analysis.effective_max_stack_depth())
            .with_annotator(self.annotator.as_deref())
    }

    fn start_run(&self) -> Instant {
        let parallel = self.config.analysis.effective_parallel_post_passes();
        tracing::info!(parallel_post_passes = parallel, "starting thread dump analysis");
        self.dispatcher
            .on_analysis_started(&AnalysisStartedEvent { parallel_post_passes: parallel });
        Instant::now()
    }

    fn complete_run(&self, assembler: ThreadAssembler<'_>, started: Instant) -> ThreadDumpAnalysis {
        let (mut analysis, stats) = assembler.finish();
        self.run_post_passes(&mut analysis);
        self.report(&analysis, &stats, started);
        analysis
    }

    fn run_post_passes(&self, analysis: &mut ThreadDumpAnalysis) {
        let (gc, pools, deadlock) = if self.config.analysis.effective_parallel_post_passes() {
            let threads: &[Thread] = &analysis.threads;
            let (gc, (pools, deadlock)) = rayon::join(
                || classify_gc_threads(threads),
                || {
                    rayon::join(
                        || group_thread_pools(threads, &self.config.pools),
                        || self.detect(threads),
                    )
                },
            );
            (gc, pools, deadlock)
        } else {
            (
                classify_gc_threads(&analysis.threads),
                group_thread_pools(&analysis.threads, &self.config.pools),
                self.detect(&analysis.threads),
            )
        };
        self.apply(analysis, gc, pools, deadlock);
    }

    /// Builds the graph from one snapshot of the sealed threads' lock info.
    fn detect(&self, threads: &[Thread]) -> DeadlockReport {
        let graph = WaitForGraph::from_threads(threads);
        detect_deadlock(
            &graph,
            self.config.analysis.effective_reconstruct_deadlock_chains(),
        )
    }

    fn apply(
        &self,
        analysis: &mut ThreadDumpAnalysis,
        gc: GcThreadAnalysis,
        pools: Vec<ThreadPool>,
        deadlock: DeadlockReport,
    ) {
        self.dispatcher.on_gc_classified(&GcClassifiedEvent {
            total_gc_threads: gc.total_gc_threads,
            categories: gc.types.len(),
        });
        self.dispatcher.on_pools_grouped(&PoolsGroupedEvent {
            pools: pools.len(),
            pooled_threads: pools.iter().map(|p| p.active_threads).sum(),
        });

        analysis.gc_analysis = gc;
        analysis.thread_pools = pools;
        analysis.deadlock_found = deadlock.found;

        if deadlock.found {
            tracing::warn!(chain = ?deadlock.cycle, "deadlock detected");
            self.dispatcher.on_deadlock_detected(&DeadlockDetectedEvent {
                chain: deadlock.cycle.clone(),
            });
            if !deadlock.cycle.is_empty() {
                let chain: Vec<ThreadRef> = deadlock
                    .cycle
                    .iter()
                    .filter_map(|id| analysis.find_by_id(*id))
                    .collect();
                analysis.deadlock_chains.push(chain);
            }
        }
    }

    fn report(&self, analysis: &ThreadDumpAnalysis, stats: &AssemblyStats, started: Instant) {
        let duration_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            lines = stats.lines_processed,
            dropped = stats.dropped_lines,
            duration_ms,
            summary = %analysis.summary(),
            "thread dump analysis complete"
        );
        self.dispatcher.on_analysis_complete(&AnalysisCompleteEvent {
            total_threads: analysis.total_threads,
            lines_processed: stats.lines_processed,
            deadlock_found: analysis.deadlock_found,
            duration_ms,
        });
    }
}

/// Analyze with the default configuration and no observers.
pub fn parse_and_analyze<I, S>(lines: I) -> ThreadDumpAnalysis
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ThreadDumpAnalyzer::default().parse_and_analyze(lines)
}
