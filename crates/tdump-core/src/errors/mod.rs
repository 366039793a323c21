//! Error types for every tdump subsystem.
//!
//! Each enum implements [`TdumpErrorCode`] so callers can surface a stable code
//! alongside the human message.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod log_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::TdumpErrorCode;
pub use log_error::LogError;
