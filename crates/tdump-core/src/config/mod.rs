//! Configuration for the analyzer, pool capacities, and logging.

pub mod analysis_config;
pub mod log_config;
pub mod pool_config;
pub mod tdump_config;

pub use analysis_config::AnalysisConfig;
pub use log_config::{LogConfig, LogFormat};
pub use pool_config::{PoolCapacity, PoolCapacityTable};
pub use tdump_config::TdumpConfig;
