//! # CLI Validate Command
//!
//! Configuration validation for the league CLI.

use error::{AppError, Result};
use migration::DatabaseConfig;
use tracing::info;

use crate::config::MigrationConfig;

/// Validates credentials and artifact locations.
///
/// `lookup` resolves environment variables; the CLI passes the process
/// environment.
///
/// # Returns
///
/// The number of entity source files found under the schema path.
pub fn validate<F>(config: &MigrationConfig, lookup: F) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    info!(target: "validate", "Validating configuration...");

    let database = DatabaseConfig::from_lookup(lookup)?;
    info!(target: "validate", url = %database.redacted_connection_string(), "Database configuration found");

    let sources = config.entity_sources()?;
    if sources.is_empty() {
        return Err(AppError::validation(format!(
            "No entity sources found in {}",
            config.schema.display()
        )));
    }

    info!(target: "validate", entities = %sources.len(), "Configuration is valid");
    Ok(sources.len())
}
