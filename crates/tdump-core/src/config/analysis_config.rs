//! Analysis engine configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the parse-and-analyze pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Run GC classification, pool grouping, and deadlock detection in parallel.
    /// Default: false.
    pub parallel_post_passes: Option<bool>,
    /// Rebuild the ordered member list of a detected deadlock cycle. Default: true.
    pub reconstruct_deadlock_chains: Option<bool>,
    /// Maximum stack lines retained per thread. Lines past the cap still feed
    /// state inference. Default: unlimited.
    pub max_stack_depth: Option<usize>,
}

impl AnalysisConfig {
    /// Returns whether post-passes run concurrently, defaulting to false.
    pub fn effective_parallel_post_passes(&self) -> bool {
        self.parallel_post_passes.unwrap_or(false)
    }

    /// Returns whether deadlock chains are reconstructed, defaulting to true.
    pub fn effective_reconstruct_deadlock_chains(&self) -> bool {
        self.reconstruct_deadlock_chains.unwrap_or(true)
    }

    /// Returns the stack depth cap, `usize::MAX` when unset.
    pub fn effective_max_stack_depth(&self) -> usize {
        self.max_stack_depth.unwrap_or(usize::MAX)
    }
}
