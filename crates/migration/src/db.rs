//! # Database Connection Management
//!
//! Connection settings for the league PostgreSQL database. Credentials come
//! from the environment, optionally seeded from a `.env.local` file. The port
//! is fixed and TLS is always on.

use std::{path::Path, time::Duration};

use ::error::{AppError, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Environment variable holding the database host.
pub const ENV_HOST: &str = "POSTGRES_HOST";
/// Environment variable holding the database password.
pub const ENV_PASSWORD: &str = "POSTGRES_PASSWORD";
/// Environment variable holding the database name.
pub const ENV_DATABASE: &str = "POSTGRES_DATABASE";
/// Optional environment variable holding the database user.
pub const ENV_USER: &str = "POSTGRES_USER";

/// Variables that must be present for a connection to be configured.
pub const REQUIRED_VARS: [&str; 3] = [ENV_HOST, ENV_PASSWORD, ENV_DATABASE];

/// File loaded into the environment before reading credentials.
pub const ENV_FILE: &str = ".env.local";

/// PostgreSQL port; not configurable.
pub const POSTGRES_PORT: u16 = 5432;

const DEFAULT_USER: &str = "postgres";

/// Database connection configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Database host address
    pub host:            String,
    /// Database port number
    pub port:            u16,
    /// Database name
    pub database:        String,
    /// Database username
    pub username:        String,
    /// Database password
    pub password:        String,
    /// SSL mode for connection
    pub ssl_mode:        SslMode,
    /// Maximum connections in pool
    pub pool_size:       u32,
    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

/// SSL modes accepted for the league database.
///
/// Every mode encrypts the connection; there is deliberately no `disable`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    /// Require SSL connection
    #[default]
    Require,
    /// Verify SSL certificate
    VerifyCa,
    /// Verify full SSL certificate chain
    VerifyFull,
}

impl SslMode {
    /// Converts the SSL mode to a PostgreSQL connection string value
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl DatabaseConfig {
    /// Creates a configuration for `host` and `database` with the fixed port and
    /// required SSL.
    #[must_use]
    pub fn new(host: &str, database: &str, password: &str) -> Self {
        Self {
            host:            host.to_string(),
            port:            POSTGRES_PORT,
            database:        database.to_string(),
            username:        DEFAULT_USER.to_string(),
            password:        password.to_string(),
            ssl_mode:        SslMode::Require,
            pool_size:       10,
            connect_timeout: 30,
        }
    }

    /// Sets the database username
    #[must_use]
    pub fn with_username(mut self, username: &str) -> Self {
        self.username = username.to_string();
        self
    }

    /// Sets the SSL mode
    #[must_use]
    pub fn with_ssl_mode(mut self, ssl_mode: SslMode) -> Self {
        self.ssl_mode = ssl_mode;
        self
    }

    /// Sets the connection pool size
    #[must_use]
    pub fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Sets the connection timeout in seconds
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: u64) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a config error naming every required variable that is missing.
    pub fn from_env() -> Result<Self> { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Loads `.env.local` (if present) from `dir`, then reads the environment.
    ///
    /// Variables already set in the process take precedence over the file.
    ///
    /// # Errors
    ///
    /// Returns a config error if the file exists but cannot be parsed, or if
    /// required variables are missing.
    pub fn from_env_file(dir: &Path) -> Result<Self> {
        let path = dir.join(ENV_FILE);
        if path.exists() {
            dotenvy::from_path(&path)
                .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;
            tracing::debug!(path = %path.display(), "Loaded environment file");
        }
        Self::from_env()
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns a config error naming every required variable that is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| lookup(key).is_none())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let get = |key: &str| lookup(key).unwrap_or_default();
        let username = lookup(ENV_USER)
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_USER.to_string());

        Ok(Self::new(&get(ENV_HOST), &get(ENV_DATABASE), &get(ENV_PASSWORD)).with_username(&username))
    }

    /// Builds the PostgreSQL connection string
    #[must_use]
    pub fn build_connection_string(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode={}",
            percent_encode_userinfo(&self.username),
            percent_encode_userinfo(&self.password),
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }

    /// Connection string with the password masked, for logs.
    #[must_use]
    pub fn redacted_connection_string(&self) -> String {
        format!(
            "postgres://{}:***@{}:{}/{}?sslmode={}",
            percent_encode_userinfo(&self.username),
            self.host,
            self.port,
            self.database,
            self.ssl_mode.as_str()
        )
    }

    /// Creates a database connection from this configuration
    ///
    /// # Errors
    ///
    /// Returns a database error if the connection fails.
    pub async fn connect(&self) -> Result<DatabaseConnection> {
        let mut options = ConnectOptions::new(self.build_connection_string());
        options
            .max_connections(self.pool_size)
            .connect_timeout(Duration::from_secs(self.connect_timeout))
            .sqlx_logging(false);

        tracing::info!(url = %self.redacted_connection_string(), "Connecting to database");
        Database::connect(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {}", e)))
    }
}

/// Percent-encoding for username/password in PostgreSQL URIs.
///
/// Everything except RFC 3986 unreserved characters is encoded as UTF-8 bytes.
fn percent_encode_userinfo(s: &str) -> String {
    let mut result = String::with_capacity(s.len().saturating_mul(3));
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~') {
            result.push(c);
        }
        else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).as_bytes() {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    result
}
