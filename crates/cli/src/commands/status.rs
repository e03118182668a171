//! # CLI Status Command
//!
//! Reports which migrations have been applied.

use std::time::Instant;

use error::{Result, ResultExt as _};
use migration::{Migrator, MigratorTrait as _};
use sea_orm::DatabaseConnection;

/// Migration name with its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationEntry {
    pub name:    String,
    pub applied: bool,
}

/// Reads the migration table and returns every known migration in order.
pub async fn status(db: &DatabaseConnection) -> Result<Vec<MigrationEntry>> {
    let start = Instant::now();
    let applied = Migrator::get_applied_migrations(db)
        .await
        .migration_context("Failed to read applied migrations")?;
    let pending = Migrator::get_pending_migrations(db)
        .await
        .migration_context("Failed to get pending migrations")?;
    logging::log_db_query!(
        "select migration versions",
        "seaql_migrations",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let entries = applied
        .iter()
        .map(|m| {
            MigrationEntry {
                name:    m.name().to_string(),
                applied: true,
            }
        })
        .chain(pending.iter().map(|m| {
            MigrationEntry {
                name:    m.name().to_string(),
                applied: false,
            }
        }))
        .collect();
    Ok(entries)
}

/// Renders the entries as one line per migration.
pub fn format_status(entries: &[MigrationEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        let state = if entry.applied { "applied" } else { "pending" };
        output.push_str(&format!("{:<8} {}\n", state, entry.name));
    }
    let applied = entries.iter().filter(|e| e.applied).count();
    output.push_str(&format!("{} applied, {} pending\n", applied, entries.len() - applied));
    output
}
