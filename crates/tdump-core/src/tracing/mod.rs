//! Global tracing subscriber setup.
//!
//! The engine logs through `tracing` macros only; installing a subscriber is
//! left to the embedding application via [`init_tracing`].

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogConfig, LogFormat};
use crate::errors::LogError;

static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. `RUST_LOG` overrides `config.level`.
///
/// A second call returns [`LogError::AlreadyInitialized`].
pub fn init_tracing(config: &LogConfig) -> Result<(), LogError> {
    if TRACING_INITIALIZED.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_ansi(true),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false),
            )
            .try_init(),
    };
    result.map_err(|e| LogError::SetSubscriber(e.to_string()))?;

    let _ = TRACING_INITIALIZED.set(());
    Ok(())
}

pub fn is_initialized() -> bool {
    TRACING_INITIALIZED.get().is_some()
}
