//! Functional wait-for graph: each thread waits on at most one other.

use tdump_core::types::collections::FxHashMap;

use crate::model::Thread;

#[derive(Debug, Clone, Default)]
pub struct WaitForGraph {
    edges: FxHashMap<u64, u64>,
    /// Waiters in first-insertion order, so traversal is deterministic.
    order: Vec<u64>,
}

impl WaitForGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `waiter` waits on a lock owned by `owner`. A later edge for
    /// the same waiter replaces the earlier one.
    pub fn add_edge(&mut self, waiter: u64, owner: u64) {
        if self.edges.insert(waiter, owner).is_none() {
            self.order.push(waiter);
        }
    }

    /// Edges for every thread with an id whose lock info says it waits for a
    /// known owner.
    pub fn from_threads(threads: &[Thread]) -> Self {
        let mut graph = Self::new();
        for thread in threads {
            if let (Some(id), Some(owner)) = (thread.id, thread.waits_for_owner()) {
                graph.add_edge(id, owner);
            }
        }
        graph
    }

    pub fn next(&self, node: u64) -> Option<u64> {
        self.edges.get(&node).copied()
    }

    /// Nodes with an outgoing edge, in insertion order.
    pub fn waiters(&self) -> &[u64] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
