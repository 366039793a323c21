//! Tracing subscriber installation errors.

use super::error_code::{self, TdumpErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(String),
}

impl TdumpErrorCode for LogError {
    fn error_code(&self) -> &'static str {
        error_code::LOG_INIT_ERROR
    }
}
