//! # CLI Migration Command
//!
//! Database migration handling for the league CLI.

use error::{Result, ResultExt as _};
use migration::{Migrator, MigratorTrait as _};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::commands::MigrateArgs;

/// What a migrate invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrateReport {
    /// Dry run: migrations that would be applied, in order
    Pending(Vec<String>),
    /// Number of migrations applied
    Applied(usize),
    /// Number of migrations rolled back
    RolledBack(usize),
}

impl std::fmt::Display for MigrateReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MigrateReport::Pending(names) if names.is_empty() => write!(f, "Database is up to date"),
            MigrateReport::Pending(names) => {
                writeln!(f, "{} pending migration(s):", names.len())?;
                for name in names {
                    writeln!(f, "  {}", name)?;
                }
                Ok(())
            },
            MigrateReport::Applied(count) => write!(f, "Applied {} migration(s)", count),
            MigrateReport::RolledBack(count) => write!(f, "Rolled back {} migration(s)", count),
        }
    }
}

/// Runs database migrations
///
/// # Arguments
///
/// * `db` - Open database connection
/// * `args` - Migrate command arguments
///
/// # Returns
///
/// A `Result` with a report of what was done.
pub async fn migrate(db: &DatabaseConnection, args: &MigrateArgs) -> Result<MigrateReport> {
    info!(
        target: "migrate",
        dry_run = %args.dry_run,
        rollback = %args.rollback,
        steps = ?args.steps,
        "Running database migrations..."
    );

    let pending = pending_names(db).await?;

    if args.dry_run {
        info!(target: "migrate", pending_count = %pending.len(), "Dry run mode - nothing applied");
        let limit = args.steps.map_or(pending.len(), |n| n as usize);
        return Ok(MigrateReport::Pending(pending.into_iter().take(limit).collect()));
    }

    if args.rollback {
        let applied = Migrator::get_applied_migrations(db)
            .await
            .migration_context("Failed to read applied migrations")?
            .len();
        let steps = args.steps.unwrap_or(1);
        info!(target: "migrate", steps = %steps, "Rolling back migrations...");

        logging::measure_duration!("migrate", "down", { Migrator::down(db, Some(steps)).await })
            .migration_context("Failed to rollback migration")?;

        let rolled_back = applied.min(steps as usize);
        info!(target: "migrate", rolled_back = %rolled_back, "Rollback completed successfully");
        return Ok(MigrateReport::RolledBack(rolled_back));
    }

    logging::measure_duration!("migrate", "up", { Migrator::up(db, args.steps).await })
        .migration_context("Failed to run migrations")?;

    let applied = args.steps.map_or(pending.len(), |n| pending.len().min(n as usize));
    info!(target: "migrate", applied = %applied, "Migrations completed successfully");
    Ok(MigrateReport::Applied(applied))
}

async fn pending_names(db: &DatabaseConnection) -> Result<Vec<String>> {
    let pending = Migrator::get_pending_migrations(db)
        .await
        .migration_context("Failed to get pending migrations")?;
    Ok(pending.iter().map(|m| m.name().to_string()).collect())
}
