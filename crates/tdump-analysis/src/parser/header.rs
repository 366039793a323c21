//! Thread header recognition.
//!
//! Dumps in the wild use several incompatible header shapes. Each shape has
//! its own recognizer, a pure `line -> Option<ThreadStub>` function. They are
//! tried in [`RECOGNIZERS`] order and the first match wins; supporting a new
//! shape means appending to that list.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tdump_core::ThreadState;

use super::state::state_from_description;

/// Which header shape produced a stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderFormat {
    /// `"name" [daemon] prio=N|os_prio=N [key=value ...] tid=T nid=X <description> [addr]`
    Classic,
    /// `"name" #N [daemon] ... tid=T ... [addr]`
    Numbered,
    /// `"name"` or `#N`, plus `state=WORD` or `waiting on condition`, plus `[addr]`
    Minimal,
}

impl HeaderFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Numbered => "numbered",
            Self::Minimal => "minimal",
        }
    }
}

/// What a header line tells us about a thread before any stack lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadStub {
    pub format: HeaderFormat,
    pub name: String,
    pub id: Option<u64>,
    pub tid: Option<String>,
    pub priority: i32,
    pub state: ThreadState,
    pub daemon: bool,
}

/// One entry in the recognizer chain.
pub struct HeaderRecognizer {
    pub format: HeaderFormat,
    pub recognize: fn(&str) -> Option<ThreadStub>,
}

/// Recognizers in priority order.
pub const RECOGNIZERS: &[HeaderRecognizer] = &[
    HeaderRecognizer {
        format: HeaderFormat::Classic,
        recognize: recognize_classic,
    },
    HeaderRecognizer {
        format: HeaderFormat::Numbered,
        recognize: recognize_numbered,
    },
    HeaderRecognizer {
        format: HeaderFormat::Minimal,
        recognize: recognize_minimal,
    },
];

/// Try every recognizer in order. `None` means the line is not a header.
pub fn parse_header(line: &str) -> Option<ThreadStub> {
    RECOGNIZERS.iter().find_map(|r| (r.recognize)(line))
}

/// Priority comes only from a bare `prio=`; a lone `os_prio=` is accepted but
/// not captured.
const CLASSIC_PATTERN: &str = concat!(
    r#""([^"]+)"\s+(?:daemon\s+)?"#,
    r#"(?:prio=(\d+)\s+(?:os_prio=\d+\s+)?|os_prio=\d+\s+)"#,
    r#"(?:\w+=\S+\s+)*?tid=(\S+)\s+nid=\S+\s+(?:in\s+)?([^\[]+)"#,
);

const NUMBERED_PATTERN: &str =
    r#""([^"]+)"\s+#(\d+)\s+(?:daemon\s+)?(?:prio=(\d+)\s+)?.*?tid=(\S+)\s+.*?\[([^\]]+)\]"#;

const MINIMAL_PATTERN: &str =
    r#"(?:"([^"]+)"|#(\d+)).*?(?:state=(\w+)|waiting on condition)\s+\[([^\]]+)\]"#;

fn compiled(cell: &'static OnceLock<Option<Regex>>, pattern: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::error!(error = %e, "failed to compile header pattern");
            None
        }
    })
    .as_ref()
}

fn recognize_classic(line: &str) -> Option<ThreadStub> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let caps = compiled(&RE, CLASSIC_PATTERN)?.captures(line)?;
    Some(ThreadStub {
        format: HeaderFormat::Classic,
        name: caps[1].to_string(),
        id: None,
        tid: Some(caps[3].to_string()),
        priority: parse_priority(caps.get(2).map(|m| m.as_str())),
        state: state_from_description(&caps[4]),
        daemon: mentions_daemon(line),
    })
}

/// This shape carries no description, so the state starts UNKNOWN and is
/// usually settled by the stack lines.
fn recognize_numbered(line: &str) -> Option<ThreadStub> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let caps = compiled(&RE, NUMBERED_PATTERN)?.captures(line)?;
    Some(ThreadStub {
        format: HeaderFormat::Numbered,
        name: caps[1].to_string(),
        id: caps[2].parse().ok(),
        tid: Some(caps[4].to_string()),
        priority: parse_priority(caps.get(3).map(|m| m.as_str())),
        state: ThreadState::Unknown,
        daemon: mentions_daemon(line),
    })
}

fn recognize_minimal(line: &str) -> Option<ThreadStub> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    let caps = compiled(&RE, MINIMAL_PATTERN)?.captures(line)?;
    let id = caps.get(2).and_then(|m| m.as_str().parse().ok());
    let name = match (caps.get(1), caps.get(2)) {
        (Some(quoted), _) => quoted.as_str().to_string(),
        (None, Some(numeric)) => numeric.as_str().to_string(),
        (None, None) => return None,
    };
    Some(ThreadStub {
        format: HeaderFormat::Minimal,
        name,
        id,
        tid: None,
        priority: 0,
        state: minimal_state(&caps),
        daemon: mentions_daemon(line),
    })
}

fn minimal_state(caps: &Captures<'_>) -> ThreadState {
    match caps.get(3) {
        Some(word) => state_from_description(word.as_str()),
        None => state_from_description("waiting on condition"),
    }
}

fn parse_priority(raw: Option<&str>) -> i32 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

/// The daemon flag comes from the whole raw line, case-insensitively.
fn mentions_daemon(line: &str) -> bool {
    line.to_lowercase().contains("daemon")
}
