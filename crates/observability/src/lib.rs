//! Tracing and logging (shared setup).

/// Logging configuration and subscriber installation.
pub mod logging;

pub use logging::{LogFormat, LoggingConfig, LoggingError};

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    logging::init(config)
}
