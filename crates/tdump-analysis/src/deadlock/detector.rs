//! Tortoise/hare cycle detection over the wait-for graph.
//!
//! Only the first cycle found is reported. Start nodes are visited in
//! insertion order; a walk stops as soon as either pointer reaches a node with
//! no outgoing edge, since a terminal wait cannot close a cycle.

use super::graph::WaitForGraph;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeadlockReport {
    pub found: bool,
    /// Members of the found cycle in wait order, starting at the meeting
    /// node. Empty when nothing was found or reconstruction was not asked for.
    pub cycle: Vec<u64>,
}

pub fn detect_deadlock(graph: &WaitForGraph, reconstruct_chain: bool) -> DeadlockReport {
    for &start in graph.waiters() {
        if let Some(meeting) = find_meeting_point(graph, start) {
            tracing::debug!(start, meeting, "wait-for cycle found");
            let cycle = if reconstruct_chain {
                collect_cycle(graph, meeting)
            } else {
                Vec::new()
            };
            return DeadlockReport { found: true, cycle };
        }
    }
    DeadlockReport::default()
}

/// Node where slow and fast pointers meet, or `None` once either runs off a
/// terminal node.
fn find_meeting_point(graph: &WaitForGraph, start: u64) -> Option<u64> {
    let mut slow = start;
    let mut fast = start;
    loop {
        slow = graph.next(slow)?;
        fast = graph.next(fast)?;
        fast = graph.next(fast)?;
        if slow == fast {
            return Some(slow);
        }
    }
}

fn collect_cycle(graph: &WaitForGraph, meeting: u64) -> Vec<u64> {
    let mut cycle = vec![meeting];
    let mut current = meeting;
    // Every node inside a cycle has an edge; the bound guards malformed input.
    for _ in 0..graph.len() {
        match graph.next(current) {
            Some(next) if next != meeting => {
                cycle.push(next);
                current = next;
            }
            _ => break,
        }
    }
    cycle
}
