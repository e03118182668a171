//! # Logging Configuration
//!
//! Configuration for the logging subsystem.
//! Supports environment variables and programmatic configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, prelude::*};

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level or filter directive (debug, info, `info,sea_orm=warn`)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path
    #[serde(default)]
    pub log_file: Option<String>,

    /// Whether to include timestamps
    #[serde(default = "default::bool_true")]
    pub include_timestamp: bool,

    /// Environment (development, testing, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

mod default {
    pub fn bool_true() -> bool { true }
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "pretty".to_string() }

fn default_environment() -> String { "development".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level:             default_level(),
            format:            default_format(),
            log_file:          None,
            include_timestamp: true,
            environment:       default_environment(),
        }
    }
}

impl LoggingConfig {
    /// Create configuration from environment variables, falling back to the
    /// given values.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level: std::env::var("RUST_LOG")
                .ok()
                .unwrap_or_else(|| level.to_string()),
            format: std::env::var("LEAGUE_LOG_FORMAT")
                .ok()
                .unwrap_or_else(|| format.to_string()),
            log_file: std::env::var("LEAGUE_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
            environment: std::env::var("LEAGUE_ENV").unwrap_or_else(|_| default_environment()),
            ..Default::default()
        }
    }

    /// Filter built from `level`; an unparsable directive falls back to `info`.
    pub fn filter(&self) -> EnvFilter { EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info")) }

    /// Build the tracing subscriber from this configuration.
    pub fn build(&self) -> Box<dyn tracing::Subscriber + Send + Sync> {
        let file_layer = self.log_file.as_deref().map(|path| {
            let path = Path::new(path);
            let directory = path.parent().unwrap_or_else(|| Path::new("."));
            let file_name = path.file_name().unwrap_or_default();
            let appender = tracing_appender::rolling::daily(directory, file_name);
            fmt::layer().json().with_ansi(false).with_writer(appender)
        });

        Box::new(
            Registry::default()
                .with(self.console_layer())
                .with(file_layer)
                .with(self.filter()),
        )
    }

    /// Console layer for the configured format. Unknown formats use JSON.
    fn console_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let timer = fmt::time::UtcTime::rfc_3339();
        match (self.format.as_str(), self.include_timestamp) {
            ("pretty", true) => fmt::layer().pretty().with_timer(timer).boxed(),
            ("pretty", false) => fmt::layer().pretty().without_time().boxed(),
            ("compact", true) => fmt::layer().compact().with_timer(timer).boxed(),
            ("compact", false) => fmt::layer().compact().without_time().boxed(),
            (_, true) => fmt::layer().json().with_timer(timer).boxed(),
            (_, false) => fmt::layer().json().without_time().boxed(),
        }
    }
}
