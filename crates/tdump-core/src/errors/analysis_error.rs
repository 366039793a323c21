//! Errors surfaced by the analysis entry points.

use super::config_error::ConfigError;
use super::error_code::{self, TdumpErrorCode};

/// The only ways an analysis run can fail outright.
///
/// Malformed dump lines are never errors; they are attached to the open thread
/// or dropped.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("failed to read thread dump input: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl TdumpErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::INPUT_IO_ERROR,
            Self::Config(e) => e.error_code(),
        }
    }
}
