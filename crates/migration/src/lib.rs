//! # League Schema Migrations
//!
//! Migrations that create the league tables, the migrator that orders them, and
//! the PostgreSQL connection configuration used to run them.
//!
//! The migrations only use portable column helpers, so the same migrator builds
//! the schema on PostgreSQL in production and on in-memory SQLite in tests.

pub use sea_orm_migration::prelude::*;

pub mod db;
pub mod migrator;

mod m20240301_000001_create_registrant_table;
mod m20240301_000002_create_program_table;
mod m20240301_000003_create_location_table;
mod m20240301_000004_create_division_table;
mod m20240301_000005_create_team_table;
mod m20240301_000006_create_enrollee_table;
mod m20240301_000007_create_player_table;
mod m20240301_000008_create_coach_table;
mod m20240301_000009_create_event_table;
mod m20240301_000010_create_game_table;
mod m20240315_000001_add_event_program_id;

pub use db::{DatabaseConfig, SslMode};
pub use migrator::Migrator;
