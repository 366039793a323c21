//! Data model for one analyzed thread dump.
//!
//! Threads are owned by [`ThreadDumpAnalysis::threads`]. Every other structure
//! (state buckets, pools, GC analysis, deadlock chains) refers to them through
//! [`ThreadRef`] indices, so identity is preserved and nothing is copied.

use std::collections::BTreeMap;

use serde::Serialize;
use tdump_core::config::PoolCapacity;
use tdump_core::ThreadState;

/// Index of a thread in [`ThreadDumpAnalysis::threads`] (or in whichever
/// slice a post-pass was run over).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ThreadRef(pub usize);

impl ThreadRef {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Lock relation of a thread. The parser never fills this; a
/// [`LockAnnotator`](crate::deadlock::annotator::LockAnnotator) may.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockInfo {
    pub lock_name: String,
    /// Numeric id of the thread that owns the lock.
    pub owner_id: Option<u64>,
    /// `true` when the thread waits for the lock, `false` when it holds it.
    pub is_waiting_for: bool,
}

/// One dump entry: header metadata plus the stack lines that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Thread {
    /// Not guaranteed unique within a dump.
    pub name: String,
    /// `#N` id, when the header carried one.
    pub id: Option<u64>,
    /// Raw `tid=` token.
    pub tid: Option<String>,
    pub priority: i32,
    pub state: ThreadState,
    pub daemon: bool,
    /// Lines in dump order.
    pub stack_trace: Vec<String>,
    /// Stack lines dropped by the configured depth cap.
    #[serde(skip_serializing_if = "is_zero")]
    pub omitted_frames: usize,
    pub lock_info: Option<LockInfo>,
}

fn is_zero(n: &usize) -> bool {
    *n == 0
}

impl Thread {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when the lock annotation describes a wait with a known owner.
    pub fn waits_for_owner(&self) -> Option<u64> {
        self.lock_info
            .as_ref()
            .filter(|info| info.is_waiting_for)
            .and_then(|info| info.owner_id)
    }
}

/// Threads sharing a naming prefix such as `pool-2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadPool {
    pub name: String,
    pub active_threads: usize,
    pub threads: Vec<ThreadRef>,
    /// Only present when supplied by configuration.
    pub capacity: Option<PoolCapacity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct GcThreadAnalysis {
    pub total_gc_threads: usize,
    pub gc_threads: Vec<ThreadRef>,
    /// Category name to count.
    pub types: BTreeMap<String, usize>,
}

/// Aggregate result of one analysis run.
#[derive(Debug, Clone, Serialize, Default)]
pub struct ThreadDumpAnalysis {
    pub threads: Vec<Thread>,
    pub threads_by_state: BTreeMap<ThreadState, Vec<ThreadRef>>,
    pub state_count: BTreeMap<ThreadState, usize>,
    pub total_threads: usize,
    pub daemon_thread_count: usize,
    pub non_daemon_thread_count: usize,
    pub thread_pools: Vec<ThreadPool>,
    pub gc_analysis: GcThreadAnalysis,
    pub deadlock_found: bool,
    pub deadlock_chains: Vec<Vec<ThreadRef>>,
}

impl ThreadDumpAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sealed thread and update every derived count.
    pub fn add_thread(&mut self, thread: Thread) -> ThreadRef {
        let r = ThreadRef(self.threads.len());
        self.threads_by_state.entry(thread.state).or_default().push(r);
        *self.state_count.entry(thread.state).or_insert(0) += 1;
        if thread.daemon {
            self.daemon_thread_count += 1;
        } else {
            self.non_daemon_thread_count += 1;
        }
        self.threads.push(thread);
        self.total_threads += 1;
        r
    }

    pub fn thread(&self, r: ThreadRef) -> Option<&Thread> {
        self.threads.get(r.0)
    }

    pub fn threads_in_state(&self, state: ThreadState) -> impl Iterator<Item = &Thread> + '_ {
        self.threads_by_state
            .get(&state)
            .into_iter()
            .flatten()
            .filter_map(|r| self.thread(*r))
    }

    pub fn pool_members<'a>(
        &'a self,
        pool: &'a ThreadPool,
    ) -> impl Iterator<Item = &'a Thread> + 'a {
        pool.threads.iter().filter_map(|r| self.thread(*r))
    }

    pub fn gc_threads(&self) -> impl Iterator<Item = &Thread> + '_ {
        self.gc_analysis.gc_threads.iter().filter_map(|r| self.thread(*r))
    }

    /// First thread carrying the given `#N` id.
    pub fn find_by_id(&self, id: u64) -> Option<ThreadRef> {
        self.threads
            .iter()
            .position(|t| t.id == Some(id))
            .map(ThreadRef)
    }

    pub fn count_in_state(&self, state: ThreadState) -> usize {
        self.state_count.get(&state).copied().unwrap_or(0)
    }

    /// One-line summary for logs and quick reports.
    pub fn summary(&self) -> String {
        format!(
            "{} threads ({} daemon, {} non-daemon), {} runnable, {} blocked, {} pools, \
             {} GC threads, deadlock: {}",
            self.total_threads,
            self.daemon_thread_count,
            self.non_daemon_thread_count,
            self.count_in_state(ThreadState::Runnable),
            self.count_in_state(ThreadState::Blocked),
            self.thread_pools.len(),
            self.gc_analysis.total_gc_threads,
            if self.deadlock_found { "yes" } else { "no" },
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
