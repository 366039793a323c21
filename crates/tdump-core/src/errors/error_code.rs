//! Stable error codes shared by all error enums.

pub const INPUT_IO_ERROR: &str = "INPUT_IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const LOG_INIT_ERROR: &str = "LOG_INIT_ERROR";

/// Every tdump error exposes a machine-readable code.
pub trait TdumpErrorCode {
    fn error_code(&self) -> &'static str;

    /// `"[CODE] message"`, the form surfaced to callers outside Rust.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
