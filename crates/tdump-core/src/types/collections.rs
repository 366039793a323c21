//! Fast hash collections used across the workspace.

pub use rustc_hash::FxHashMap;
