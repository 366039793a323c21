//! Property-based tests: aggregate counts stay consistent for any line stream.

use proptest::prelude::*;

use tdump_analysis::{parse_and_analyze, ThreadState};

// =============================================================================
// Strategy helpers
// =============================================================================

fn thread_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        (1u8..4, 1u8..9).prop_map(|(p, t)| format!("pool-{p}-thread-{t}")),
        (0u8..4).prop_map(|n| format!("GC Thread#{n}")),
        Just("G1 Conc#0".to_string()),
    ]
}

fn header_line() -> impl Strategy<Value = String> {
    (
        thread_name(),
        1u32..500,
        any::<bool>(),
        prop::sample::select(vec![
            "runnable",
            "waiting on condition",
            "sleeping",
            "in Object.wait()",
        ]),
        any::<bool>(),
    )
        .prop_map(|(name, id, daemon, desc, numbered)| {
            let daemon = if daemon { "daemon " } else { "" };
            if numbered {
                format!(r#""{name}" #{id} {daemon}prio=5 os_prio=0 tid=0x{id:x} nid=0x1 {desc} [0x0]"#)
            } else {
                format!(r#""{name}" {daemon}prio=5 tid=0x{id:x} nid=0x1 {desc} [0x0]"#)
            }
        })
}

fn stack_line() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "at com.example.Worker.run(Worker.java:10)",
        "java.lang.Thread.State: BLOCKED (on object monitor)",
        "java.lang.Thread.State: RUNNABLE",
        "- parking to wait for <0x000000008c5a1e40>",
        "- waiting on <0x02e7b6c0> (a java.lang.Object)",
        "at java.lang.ref.Finalizer$FinalizerThread.run(Finalizer.java:172)",
        "",
    ])
    .prop_map(str::to_string)
}

/// A dump: some orphan lines, then headers each followed by stack lines.
fn dump() -> impl Strategy<Value = (Vec<String>, usize)> {
    (
        prop::collection::vec(stack_line(), 0..3),
        prop::collection::vec((header_line(), prop::collection::vec(stack_line(), 0..6)), 0..30),
    )
        .prop_map(|(orphans, threads)| {
            let count = threads.len();
            let mut lines = orphans;
            for (header, stack) in threads {
                lines.push(header);
                lines.extend(stack);
            }
            (lines, count)
        })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_one_thread_per_header((lines, headers) in dump()) {
        let analysis = parse_and_analyze(&lines);
        prop_assert_eq!(analysis.total_threads, headers);
        prop_assert_eq!(analysis.threads.len(), headers);
    }

    #[test]
    fn prop_counts_are_consistent((lines, _) in dump()) {
        let analysis = parse_and_analyze(&lines);
        prop_assert_eq!(
            analysis.daemon_thread_count + analysis.non_daemon_thread_count,
            analysis.total_threads
        );
        prop_assert_eq!(analysis.state_count.values().sum::<usize>(), analysis.total_threads);
        for state in ThreadState::all() {
            let bucket = analysis.threads_by_state.get(state).map_or(0, Vec::len);
            prop_assert_eq!(bucket, analysis.count_in_state(*state));
            prop_assert!(analysis.threads_in_state(*state).all(|t| t.state == *state));
        }
    }

    #[test]
    fn prop_post_pass_outputs_reference_real_threads((lines, _) in dump()) {
        let analysis = parse_and_analyze(&lines);
        let gc = &analysis.gc_analysis;
        prop_assert_eq!(gc.gc_threads.len(), gc.total_gc_threads);
        prop_assert_eq!(gc.types.values().sum::<usize>(), gc.total_gc_threads);
        prop_assert!(gc.gc_threads.iter().all(|r| r.index() < analysis.total_threads));

        let mut pooled = 0;
        for pool in &analysis.thread_pools {
            prop_assert_eq!(pool.active_threads, pool.threads.len());
            for member in analysis.pool_members(pool) {
                prop_assert!(member.name.contains("pool"));
            }
            pooled += pool.active_threads;
        }
        prop_assert!(pooled <= analysis.total_threads);
        prop_assert!(!analysis.deadlock_found);
    }
}
