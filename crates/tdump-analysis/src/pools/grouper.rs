//! Groups threads named like `pool-2-thread-7` under the key `pool-2`.
//!
//! Capacities are never guessed from names; they come from configuration or
//! stay `None`.

use tdump_core::config::PoolCapacityTable;
use tdump_core::types::collections::FxHashMap;

use crate::model::{Thread, ThreadPool, ThreadRef};

const POOL_MARKER: &str = "pool";

/// First two `-`-separated tokens joined by `-`; the whole name when there is
/// no hyphen.
pub fn extract_pool_name(thread_name: &str) -> String {
    let mut parts = thread_name.split('-');
    match (parts.next(), parts.next()) {
        (Some(first), Some(second)) => format!("{first}-{second}"),
        _ => thread_name.to_string(),
    }
}

/// One pool per distinct key, in order of first appearance.
pub fn group_thread_pools(
    threads: &[Thread],
    capacities: &PoolCapacityTable,
) -> Vec<ThreadPool> {
    let mut pools: Vec<ThreadPool> = Vec::new();
    let mut by_key: FxHashMap<String, usize> = FxHashMap::default();

    for (idx, thread) in threads.iter().enumerate() {
        if !thread.name.contains(POOL_MARKER) {
            continue;
        }
        let key = extract_pool_name(&thread.name);
        let slot = *by_key.entry(key.clone()).or_insert_with(|| {
            pools.push(ThreadPool {
                capacity: capacities.get(&key).copied(),
                name: key,
                active_threads: 0,
                threads: Vec::new(),
            });
            pools.len() - 1
        });
        let pool = &mut pools[slot];
        pool.threads.push(ThreadRef(idx));
        pool.active_threads += 1;
    }

    tracing::debug!(pools = pools.len(), "thread pool grouping complete");
    pools
}
