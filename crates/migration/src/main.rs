use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    // An explicit DATABASE_URL wins; otherwise build it from the POSTGRES_* credentials.
    if std::env::var("DATABASE_URL").is_err() {
        let dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
        match migration::DatabaseConfig::from_env_file(&dir) {
            Ok(config) => unsafe {
                std::env::set_var("DATABASE_URL", config.build_connection_string());
            },
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            },
        }
    }
    cli::run_cli(migration::Migrator).await;
}
