//! Thread-pool grouping by naming convention.

pub mod grouper;

pub use grouper::{extract_pool_name, group_thread_pools};
