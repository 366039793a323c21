//! Externally supplied thread-pool capacities.
//!
//! Dumps never state a pool's core or max size, so these only exist when an
//! operator writes them down under `[pools."<key>"]`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Pool key (e.g. `pool-2`) to configured capacity.
pub type PoolCapacityTable = BTreeMap<String, PoolCapacity>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCapacity {
    pub core_size: usize,
    pub max_size: usize,
}

impl PoolCapacity {
    /// Check `max_size > 0` and `core_size <= max_size`.
    pub fn check(&self) -> Result<(), String> {
        if self.max_size == 0 {
            return Err("max_size must be positive".to_string());
        }
        if self.core_size > self.max_size {
            return Err(format!(
                "core_size ({}) exceeds max_size ({})",
                self.core_size, self.max_size
            ));
        }
        Ok(())
    }
}
