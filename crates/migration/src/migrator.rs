//! # Database Migrator
//!
//! This module implements the Sea-ORM migrator trait for the league schema.
//! The migrator owns the ordered migration list and the migration history table.

use sea_orm_migration::prelude::*;

use crate::{
    m20240301_000001_create_registrant_table,
    m20240301_000002_create_program_table,
    m20240301_000003_create_location_table,
    m20240301_000004_create_division_table,
    m20240301_000005_create_team_table,
    m20240301_000006_create_enrollee_table,
    m20240301_000007_create_player_table,
    m20240301_000008_create_coach_table,
    m20240301_000009_create_event_table,
    m20240301_000010_create_game_table,
    m20240315_000001_add_event_program_id,
};

/// Tables created by the migrator, in creation order.
pub const TABLES: [&str; 10] = [
    "REGISTRANT",
    "PROGRAM",
    "LOCATION",
    "DIVISION",
    "TEAM",
    "ENROLLEE",
    "PLAYER",
    "COACH",
    "EVENT",
    "GAME",
];

/// The main migrator that coordinates all migration operations
///
/// # Example
///
/// ```rust,ignore
/// use migration::{Migrator, MigratorTrait};
///
/// Migrator::up(&db, None).await?;
/// ```
#[derive(Debug)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// The migrations managed by this migrator
    ///
    /// No table declares foreign-key constraints, so the creation order is free;
    /// it follows the dependency order anyway to keep the history readable.
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_registrant_table::Migration),
            Box::new(m20240301_000002_create_program_table::Migration),
            Box::new(m20240301_000003_create_location_table::Migration),
            Box::new(m20240301_000004_create_division_table::Migration),
            Box::new(m20240301_000005_create_team_table::Migration),
            Box::new(m20240301_000006_create_enrollee_table::Migration),
            Box::new(m20240301_000007_create_player_table::Migration),
            Box::new(m20240301_000008_create_coach_table::Migration),
            Box::new(m20240301_000009_create_event_table::Migration),
            Box::new(m20240301_000010_create_game_table::Migration),
            Box::new(m20240315_000001_add_event_program_id::Migration),
        ]
    }
}
