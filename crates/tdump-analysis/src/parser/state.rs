//! Keyword-based state resolution for header descriptions and stack lines.

use std::sync::OnceLock;

use regex::RegexSet;
use tdump_core::ThreadState;

/// Map a header's free-text description to a state.
///
/// `timed_waiting` is checked before the bare `waiting` it contains.
pub fn state_from_description(desc: &str) -> ThreadState {
    let desc = desc.to_lowercase();
    if desc.contains("runnable") {
        ThreadState::Runnable
    } else if desc.contains("blocked") {
        ThreadState::Blocked
    } else if desc.contains("timed_waiting") {
        ThreadState::TimedWaiting
    } else if desc.contains("waiting") {
        ThreadState::Waiting
    } else if desc.contains("sleeping") {
        ThreadState::TimedWaiting
    } else {
        ThreadState::Unknown
    }
}

/// Stack-line keyword groups, highest priority first.
const FRAME_STATE_PATTERNS: &[(&str, ThreadState)] = &[
    (
        r"(?i)waiting on|parking to wait|waiting for|waiting to lock",
        ThreadState::Waiting,
    ),
    (r"(?i)sleeping|timed waiting", ThreadState::TimedWaiting),
    (r"(?i)blocked", ThreadState::Blocked),
    (r"(?i)runnable", ThreadState::Runnable),
];

fn frame_state_set() -> Option<&'static RegexSet> {
    static SET: OnceLock<Option<RegexSet>> = OnceLock::new();
    SET.get_or_init(|| {
        let patterns = FRAME_STATE_PATTERNS.iter().map(|(p, _)| *p);
        match RegexSet::new(patterns) {
            Ok(set) => Some(set),
            Err(e) => {
                tracing::error!(error = %e, "failed to compile frame state patterns");
                None
            }
        }
    })
    .as_ref()
}

/// State implied by one stack-trace line, from the first keyword group that
/// matches. `None` when no group matches.
pub fn state_from_frame(line: &str) -> Option<ThreadState> {
    let set = frame_state_set()?;
    set.matches(line)
        .iter()
        .next()
        .map(|idx| FRAME_STATE_PATTERNS[idx].1)
}
