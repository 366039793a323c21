//! Seam for producers of lock-ownership facts.
//!
//! The header parser and assembler never extract lock relations. An embedding
//! application that can (from `- waiting to lock` / `- locked` frames, or from
//! a JVM-side report) plugs in a [`LockAnnotator`]; the assembler calls it once
//! per thread at sealing time.

use crate::model::{LockInfo, Thread};

pub trait LockAnnotator: Send + Sync {
    fn annotate(&self, thread: &Thread) -> Option<LockInfo>;
}

impl<F> LockAnnotator for F
where
    F: Fn(&Thread) -> Option<LockInfo> + Send + Sync,
{
    fn annotate(&self, thread: &Thread) -> Option<LockInfo> {
        self(thread)
    }
}
