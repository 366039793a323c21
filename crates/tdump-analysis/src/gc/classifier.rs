//! GC thread classifier.
//!
//! Membership is broad (name markers, then stack markers as a fallback);
//! categorization is narrow and name-only. A thread can therefore be counted
//! as GC yet land in "Other GC".

use std::collections::BTreeMap;
use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};

use crate::model::{GcThreadAnalysis, Thread, ThreadRef};

const GC_NAME_MARKERS: &[&str] = &["gc", "g1", "concurrent mark", "cms", "parallel", "scavenge"];

const GC_STACK_MARKERS: &[&str] = &["gc", "garbage collect", "markcompact", "scavenge", "finalize"];

/// Category by first matching name substring. Order is the tie-break: a
/// name containing both `g1` and `cms` is "G1 GC".
const GC_CATEGORIES: &[(&str, &str)] = &[
    ("g1", "G1 GC"),
    ("cms", "CMS"),
    ("concurrent mark", "Concurrent Mark"),
    ("concurrent sweep", "Concurrent Sweep"),
    ("parallel", "Parallel GC"),
    ("scavenge", "Scavenge"),
    ("finalizer", "Finalizer"),
    ("reference", "Reference Processing"),
];

pub const OTHER_GC: &str = "Other GC";

/// Substring set over lower-cased text.
struct MarkerSet {
    markers: &'static [&'static str],
    matcher: Option<AhoCorasick>,
}

impl MarkerSet {
    fn new(markers: &'static [&'static str]) -> Self {
        Self {
            markers,
            matcher: AhoCorasickBuilder::new()
                .ascii_case_insensitive(true)
                .build(markers)
                .ok(),
        }
    }

    fn is_match(&self, haystack: &str) -> bool {
        match &self.matcher {
            Some(ac) => ac.is_match(haystack),
            None => self.markers.iter().any(|m| haystack.contains(m)),
        }
    }
}

fn name_markers() -> &'static MarkerSet {
    static SET: OnceLock<MarkerSet> = OnceLock::new();
    SET.get_or_init(|| MarkerSet::new(GC_NAME_MARKERS))
}

fn stack_markers() -> &'static MarkerSet {
    static SET: OnceLock<MarkerSet> = OnceLock::new();
    SET.get_or_init(|| MarkerSet::new(GC_STACK_MARKERS))
}

/// Name test first; the stack is only examined when the name says nothing.
pub fn is_gc_thread(thread: &Thread) -> bool {
    if name_markers().is_match(&thread.name.to_lowercase()) {
        return true;
    }
    let stack = thread.stack_trace.join(" ").to_lowercase();
    stack_markers().is_match(&stack)
}

pub fn determine_gc_type(thread_name: &str) -> &'static str {
    let name = thread_name.to_lowercase();
    GC_CATEGORIES
        .iter()
        .find(|(marker, _)| name.contains(marker))
        .map(|(_, category)| *category)
        .unwrap_or(OTHER_GC)
}

/// Classify every thread. Refs index into `threads`; input order is kept.
pub fn classify_gc_threads(threads: &[Thread]) -> GcThreadAnalysis {
    let mut analysis = GcThreadAnalysis::default();
    let mut types: BTreeMap<String, usize> = BTreeMap::new();

    for (idx, thread) in threads.iter().enumerate() {
        if !is_gc_thread(thread) {
            continue;
        }
        let category = determine_gc_type(&thread.name);
        tracing::trace!(thread = %thread.name, category, "gc thread");
        analysis.gc_threads.push(ThreadRef(idx));
        *types.entry(category.to_string()).or_insert(0) += 1;
    }

    analysis.total_gc_threads = analysis.gc_threads.len();
    analysis.types = types;
    tracing::debug!(
        total = analysis.total_gc_threads,
        categories = analysis.types.len(),
        "gc classification complete"
    );
    analysis
}
