//! Thread scheduling state as reported (or inferred) from a thread dump.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Observed state of one thread.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreadState {
    Runnable,
    Blocked,
    Waiting,
    TimedWaiting,
    #[default]
    Unknown,
}

impl ThreadState {
    /// All five states, in report order.
    pub fn all() -> &'static [ThreadState] {
        &[
            Self::Runnable,
            Self::Blocked,
            Self::Waiting,
            Self::TimedWaiting,
            Self::Unknown,
        ]
    }

    /// State name as it appears in dumps and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Runnable => "RUNNABLE",
            Self::Blocked => "BLOCKED",
            Self::Waiting => "WAITING",
            Self::TimedWaiting => "TIMED_WAITING",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Parse an exact state name (case-insensitive).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RUNNABLE" => Some(Self::Runnable),
            "BLOCKED" => Some(Self::Blocked),
            "WAITING" => Some(Self::Waiting),
            "TIMED_WAITING" => Some(Self::TimedWaiting),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl fmt::Display for ThreadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
