//! Wait-for graph construction and tortoise/hare cycle detection.

use tdump_analysis::deadlock::{detect_deadlock, WaitForGraph};
use tdump_analysis::{LockInfo, Thread};

fn graph(edges: &[(u64, u64)]) -> WaitForGraph {
    let mut g = WaitForGraph::new();
    for &(waiter, owner) in edges {
        g.add_edge(waiter, owner);
    }
    g
}

fn waiting(id: u64, owner: u64) -> Thread {
    let mut t = Thread::new(format!("t{id}"));
    t.id = Some(id);
    t.lock_info = Some(LockInfo {
        lock_name: format!("<lock-{owner}>"),
        owner_id: Some(owner),
        is_waiting_for: true,
    });
    t
}

#[test]
fn test_two_thread_cycle() {
    let report = detect_deadlock(&graph(&[(1, 2), (2, 1)]), true);
    assert!(report.found);
    assert_eq!(report.cycle, vec![1, 2]);
}

#[test]
fn test_chain_without_cycle() {
    let report = detect_deadlock(&graph(&[(1, 2), (2, 3)]), true);
    assert!(!report.found);
    assert!(report.cycle.is_empty());
}

#[test]
fn test_self_wait_is_a_cycle() {
    let report = detect_deadlock(&graph(&[(5, 5)]), true);
    assert!(report.found);
    assert_eq!(report.cycle, vec![5]);
}

#[test]
fn test_tail_leading_into_cycle() {
    let report = detect_deadlock(&graph(&[(1, 2), (2, 3), (3, 2)]), true);
    assert!(report.found);
    let mut members = report.cycle.clone();
    members.sort_unstable();
    assert_eq!(members, vec![2, 3]);
}

#[test]
fn test_only_first_cycle_reported() {
    let report = detect_deadlock(&graph(&[(3, 4), (4, 3), (1, 2), (2, 1)]), true);
    assert!(report.found);
    assert_eq!(report.cycle, vec![3, 4]);
}

#[test]
fn test_chain_reconstruction_can_be_disabled() {
    let report = detect_deadlock(&graph(&[(1, 2), (2, 1)]), false);
    assert!(report.found);
    assert!(report.cycle.is_empty());
}

#[test]
fn test_empty_graph() {
    let g = WaitForGraph::new();
    assert!(g.is_empty());
    assert!(!detect_deadlock(&g, true).found);
}

#[test]
fn test_later_edge_replaces_earlier() {
    let g = graph(&[(1, 2), (1, 3)]);
    assert_eq!(g.next(1), Some(3));
    assert_eq!(g.len(), 1);
    assert_eq!(g.waiters().to_vec(), vec![1]);
}

#[test]
fn test_graph_from_threads_uses_only_waits_with_ids() {
    let mut holder = waiting(3, 1);
    if let Some(info) = holder.lock_info.as_mut() {
        info.is_waiting_for = false;
    }
    let mut anonymous = waiting(4, 1);
    anonymous.id = None;
    let threads = vec![waiting(1, 2), waiting(2, 1), holder, anonymous, Thread::new("idle")];

    let g = WaitForGraph::from_threads(&threads);
    assert_eq!(g.len(), 2);
    assert_eq!(g.next(1), Some(2));
    assert_eq!(g.next(2), Some(1));
    assert_eq!(g.next(3), None);
    assert!(detect_deadlock(&g, true).found);
}
