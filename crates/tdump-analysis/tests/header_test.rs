//! Header recognizers and state keyword lookup.

use tdump_analysis::parser::header::{parse_header, HeaderFormat, RECOGNIZERS};
use tdump_analysis::parser::state::{state_from_description, state_from_frame};
use tdump_analysis::ThreadState;

#[test]
fn test_recognizer_chain_order() {
    let formats: Vec<HeaderFormat> = RECOGNIZERS.iter().map(|r| r.format).collect();
    assert_eq!(
        formats,
        vec![HeaderFormat::Classic, HeaderFormat::Numbered, HeaderFormat::Minimal]
    );
}

#[test]
fn test_classic_header_states_from_description() {
    let cases = [
        (r#""a" prio=5 tid=0x1 nid=0x2 runnable [0x3]"#, ThreadState::Runnable),
        (r#""a" prio=5 tid=0x1 nid=0x2 waiting for monitor entry [0x3]"#, ThreadState::Waiting),
        (r#""a" prio=5 tid=0x1 nid=0x2 sleeping [0x3]"#, ThreadState::TimedWaiting),
        (r#""a" prio=5 tid=0x1 nid=0x2 in Object.wait() [0x3]"#, ThreadState::Unknown),
    ];
    for (line, expected) in cases {
        let stub = parse_header(line).unwrap();
        assert_eq!(stub.format, HeaderFormat::Classic, "{line}");
        assert_eq!(stub.state, expected, "{line}");
    }
}

#[test]
fn test_classic_header_tolerates_prefix_and_extra_tokens() {
    let stub =
        parse_header(r#"GC task thread#0 "GC Thread#0" os_prio=0 tid=0x01 nid=0x02 runnable [0x00]"#)
            .unwrap();
    assert_eq!(stub.format, HeaderFormat::Classic);
    assert_eq!(stub.name, "GC Thread#0");
    assert_eq!(stub.priority, 0);
    assert_eq!(stub.state, ThreadState::Runnable);

    let stub = parse_header(
        r#""VM Thread" os_prio=0 cpu=21.54ms elapsed=96.26s tid=0x00007f5c6c0b0aa0 nid=0x2766 runnable"#,
    )
    .unwrap();
    assert_eq!(stub.name, "VM Thread");
    assert_eq!(stub.tid.as_deref(), Some("0x00007f5c6c0b0aa0"));
    assert_eq!(stub.state, ThreadState::Runnable);
}

#[test]
fn test_classic_priority_only_from_bare_prio() {
    let stub = parse_header(
        r#""VM Thread" os_prio=2 tid=0x00007f8de4071800 nid=0x6b01 runnable"#,
    )
    .unwrap();
    assert_eq!(stub.format, HeaderFormat::Classic);
    assert_eq!(stub.priority, 0);

    let stub = parse_header(
        r#""Signal Dispatcher" daemon prio=9 os_prio=2 tid=0x00007f8de4100800 nid=0x6b06 runnable [0x0]"#,
    )
    .unwrap();
    assert_eq!(stub.format, HeaderFormat::Classic);
    assert_eq!(stub.priority, 9);
    assert!(stub.daemon);
}

#[test]
fn test_first_matching_recognizer_wins() {
    // Also satisfies the minimal shape; the classic one is tried first.
    let stub = parse_header(r#""a" prio=7 tid=0x1 nid=0x2 waiting on condition [0x3]"#).unwrap();
    assert_eq!(stub.format, HeaderFormat::Classic);
    assert_eq!(stub.priority, 7);
    assert_eq!(stub.state, ThreadState::Waiting);
}

#[test]
fn test_numbered_header_without_priority_defaults_to_zero() {
    let stub = parse_header(r#""svc" #7 tid=0xa nid=0xb runnable [0xc]"#).unwrap();
    assert_eq!(stub.format, HeaderFormat::Numbered);
    assert_eq!(stub.name, "svc");
    assert_eq!(stub.id, Some(7));
    assert_eq!(stub.priority, 0);
    assert_eq!(stub.tid.as_deref(), Some("0xa"));
    // Numbered headers never settle the state themselves.
    assert_eq!(stub.state, ThreadState::Unknown);
}

#[test]
fn test_minimal_header_variants() {
    let stub = parse_header(r#""poller" waiting on condition [0x00]"#).unwrap();
    assert_eq!(stub.format, HeaderFormat::Minimal);
    assert_eq!(stub.name, "poller");
    assert_eq!(stub.id, None);
    assert_eq!(stub.state, ThreadState::Waiting);

    let stub = parse_header(r#""t" state=TIMED_WAITING [0x1]"#).unwrap();
    assert_eq!(stub.state, ThreadState::TimedWaiting);
    assert_eq!(stub.priority, 0);
}

#[test]
fn test_daemon_flag_anywhere_in_line() {
    let stub = parse_header(r#""DaemonWorker" prio=5 tid=0x1 nid=0x2 runnable [0x3]"#).unwrap();
    assert!(stub.daemon);

    let stub = parse_header(r#""x" daemon prio=5 tid=0x1 nid=0x2 runnable [0x3]"#).unwrap();
    assert!(stub.daemon);
    assert_eq!(stub.name, "x");

    let stub = parse_header(r#""x" prio=5 tid=0x1 nid=0x2 runnable [0x3]"#).unwrap();
    assert!(!stub.daemon);
}

#[test]
fn test_non_header_lines() {
    for line in [
        "",
        "Full thread dump OpenJDK 64-Bit Server VM (17.0.9+9 mixed mode):",
        "java.lang.Thread.State: RUNNABLE",
        "at java.lang.Thread.run(Thread.java:748)",
        "JNI global refs: 15, weak refs: 0",
    ] {
        assert!(parse_header(line).is_none(), "{line}");
    }
}

#[test]
fn test_description_checks_timed_waiting_before_waiting() {
    assert_eq!(state_from_description("TIMED_WAITING (sleeping)"), ThreadState::TimedWaiting);
    assert_eq!(state_from_description("WAITING (parking)"), ThreadState::Waiting);
    assert_eq!(state_from_description("Blocked"), ThreadState::Blocked);
    assert_eq!(state_from_description("suspended"), ThreadState::Unknown);
}

#[test]
fn test_frame_keyword_priority() {
    // Wait keywords outrank the blocked group on the same line.
    assert_eq!(
        state_from_frame("- waiting to lock <0x1> (blocked)"),
        Some(ThreadState::Waiting)
    );
    assert_eq!(
        state_from_frame("java.lang.Thread.State: TIMED_WAITING (sleeping)"),
        Some(ThreadState::TimedWaiting)
    );
    assert_eq!(
        state_from_frame("java.lang.Thread.State: BLOCKED (on object monitor)"),
        Some(ThreadState::Blocked)
    );
    assert_eq!(
        state_from_frame("java.lang.Thread.State: RUNNABLE"),
        Some(ThreadState::Runnable)
    );
    assert_eq!(
        state_from_frame("- PARKING TO WAIT for <0x2>"),
        Some(ThreadState::Waiting)
    );
    assert_eq!(state_from_frame("at com.example.App.main(App.java:42)"), None);
}
