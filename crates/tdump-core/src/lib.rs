//! # tdump-core
//!
//! Foundation crate for the tdump thread dump analyzer.
//! Defines shared types, errors, config, events, and tracing setup.
//! The analysis engine depends on this; it performs no analysis itself.

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::TdumpConfig;
pub use errors::error_code::TdumpErrorCode;
pub use events::dispatcher::EventDispatcher;
pub use events::handler::TdumpEventHandler;
pub use types::collections::FxHashMap;
pub use types::thread_state::ThreadState;
