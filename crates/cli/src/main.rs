//! # League CLI
//!
//! Command-line interface for the league database.
//!
//! ## Usage
//!
//! ```bash
//! league migrate            # Apply pending migrations
//! league migrate --dry-run  # List pending migrations
//! league status             # Show applied and pending migrations
//! league generate           # Write drizzle/schema.sql from the entities
//! league --help             # Show help
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use clap::{CommandFactory as _, Parser};
use error::{AppError, Result, ResultExt as _};
use logging::LoggingConfig;
use migration::DatabaseConfig;

use crate::{
    commands::{Commands, completions, generate, migrate, status, validate},
    config::{DEFAULT_OUT_DIR, DEFAULT_SCHEMA_PATH, MigrationConfig},
};

/// League - youth sports league database tooling
#[derive(Parser, Debug)]
#[command(name = "league")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info", global = true)]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "LEAGUE_LOG_FORMAT", default_value = "pretty", global = true)]
    log_format: String,

    /// Optional log file, rotated daily
    #[arg(long, env = "LEAGUE_LOG_FILE", global = true)]
    log_file: Option<String>,

    /// Directory holding the entity declarations
    #[arg(long, env = "LEAGUE_SCHEMA_PATH", default_value = DEFAULT_SCHEMA_PATH, global = true)]
    schema: PathBuf,

    /// Output directory for generated SQL
    #[arg(long, env = "LEAGUE_MIGRATION_OUT", default_value = DEFAULT_OUT_DIR, global = true)]
    out: PathBuf,
}

impl Cli {
    fn migration_config(&self) -> MigrationConfig { MigrationConfig::new(&self.schema, &self.out) }

    /// Logging settings from the parsed flags. Clap has already applied the
    /// environment fallbacks, so an explicit flag wins over `RUST_LOG`.
    fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format.clone(),
            log_file: self.log_file.clone(),
            environment: std::env::var("LEAGUE_ENV").unwrap_or_else(|_| LoggingConfig::default().environment),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // `.env.local` must be in the environment before clap reads `env` defaults.
    let env_file_loaded = config::load_env_file(&std::env::current_dir()?)?;

    let cli = Cli::parse();

    logging::init_with_config(cli.logging_config())
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {}", e)))?;

    logging::info!(target: "app", command = ?cli.command, env_file_loaded, "League CLI starting...");

    run(&cli).await.log_error()?;

    logging::info!(target: "app", "League CLI completed successfully");
    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.migration_config();
    match &cli.command {
        Commands::Migrate(args) => {
            let db = DatabaseConfig::from_env()?.connect().await?;
            let report = migrate::migrate(&db, args).await?;
            println!("{}", report);
        },
        Commands::Status => {
            let db = DatabaseConfig::from_env()?.connect().await?;
            let entries = status::status(&db).await?;
            print!("{}", status::format_status(&entries));
        },
        Commands::Generate(args) => {
            let path = generate::write_schema(&config.out, args.backend.into())?;
            println!("Wrote {}", path.display());
        },
        Commands::Validate => {
            let count = validate::validate(&config, |key| std::env::var(key).ok())?;
            println!("Configuration OK ({} entity sources)", count);
        },
        Commands::Completions(args) => {
            completions::completions(args.shell, &mut Cli::command(), &mut std::io::stdout())?;
        },
    }
    Ok(())
}
