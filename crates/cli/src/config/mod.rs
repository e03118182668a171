//! # Migration Configuration
//!
//! Artifact locations for the CLI and loading of the local environment file.

use std::path::{Path, PathBuf};

use error::{AppError, Result};
use migration::db::ENV_FILE;

/// Default location of the entity sources.
pub const DEFAULT_SCHEMA_PATH: &str = "crates/entity/src";
/// Default directory for generated SQL.
pub const DEFAULT_OUT_DIR: &str = "drizzle";

/// Where the schema lives and where generated artifacts go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationConfig {
    /// Directory holding the entity declarations
    pub schema: PathBuf,
    /// Output directory for generated SQL
    pub out:    PathBuf,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            schema: PathBuf::from(DEFAULT_SCHEMA_PATH),
            out:    PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

impl MigrationConfig {
    pub fn new(schema: impl Into<PathBuf>, out: impl Into<PathBuf>) -> Self {
        Self {
            schema: schema.into(),
            out:    out.into(),
        }
    }

    /// Lists the `.rs` files of the schema directory, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns a config error if the schema path is not a readable directory.
    pub fn entity_sources(&self) -> Result<Vec<PathBuf>> {
        if !self.schema.is_dir() {
            return Err(AppError::config(format!(
                "Schema path {} is not a directory",
                self.schema.display()
            )));
        }

        let mut sources = Vec::new();
        for entry in std::fs::read_dir(&self.schema)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "rs") {
                sources.push(path);
            }
        }
        sources.sort();
        Ok(sources)
    }
}

/// Loads `.env.local` from `dir` into the process environment when it exists.
///
/// Variables that are already set keep their values. Returns whether a file was
/// loaded.
///
/// # Errors
///
/// Returns a config error if the file exists but cannot be parsed.
pub fn load_env_file(dir: &Path) -> Result<bool> {
    let path = dir.join(ENV_FILE);
    if !path.exists() {
        return Ok(false);
    }
    dotenvy::from_path(&path).map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;
    Ok(true)
}
