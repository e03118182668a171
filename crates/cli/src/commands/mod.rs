//! # CLI Commands
//!
//! Implementation of CLI commands for the league tool.

pub mod completions;
pub mod generate;
pub mod migrate;
pub mod status;
pub mod validate;

use clap::{Args, Subcommand, ValueEnum};
use sea_orm::DbBackend;

/// Available commands for the league CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Show applied and pending migrations
    Status,

    /// Write the schema DDL generated from the entities
    Generate(GenerateArgs),

    /// Verify configuration
    Validate,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the migrate command
#[derive(Args, Debug, Default)]
pub struct MigrateArgs {
    /// List pending migrations without applying them
    #[arg(long, conflicts_with = "rollback")]
    pub dry_run: bool,

    /// Roll back applied migrations instead of applying pending ones
    #[arg(long)]
    pub rollback: bool,

    /// Number of migrations to apply or roll back (rollback defaults to 1)
    #[arg(long)]
    pub steps: Option<u32>,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// SQL dialect of the generated file
    #[arg(long, value_enum, default_value_t = Backend::Postgres)]
    pub backend: Backend,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// SQL dialects supported by `generate`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl From<Backend> for DbBackend {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Postgres => DbBackend::Postgres,
            Backend::Sqlite => DbBackend::Sqlite,
        }
    }
}
