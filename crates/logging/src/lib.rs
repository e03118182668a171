//! # League Logging Infrastructure
//!
//! Structured logging utilities for the league tools.
//! Provides tracing integration with JSON output and environment-based configuration.

pub mod config;
pub mod macros;

pub use config::LoggingConfig;
// Re-exported for the macros in this crate.
#[doc(hidden)]
pub use tracing;
pub use tracing::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// # Arguments
///
/// * `level` - Log level or filter directive (debug, info, `info,sea_orm=warn`, ...)
/// * `format` - Output format (json, pretty, compact)
/// * `log_file` - Optional path to a log file, rotated daily
pub fn init(
    level: &str,
    format: &str,
    log_file: Option<&str>,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    init_with_config(LoggingConfig::from_env(level, format, log_file))
}

/// Initialize logging with a custom configuration.
pub fn init_with_config(config: LoggingConfig) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let subscriber = config.build();
    tracing::subscriber::set_global_default(subscriber)?;
    info!(
        level = %config.level,
        format = %config.format,
        environment = %config.environment,
        "Logging initialized"
    );
    Ok(())
}
