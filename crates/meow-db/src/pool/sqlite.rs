//! SQLite connection pool management
//!
//! The meow store lives in a single local database file. The pool is created
//! with `create_if_missing` and the schema is applied idempotently on every
//! startup, so a fresh deployment needs no migration step.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::time::Duration;

pub use sqlx::SqlitePool;

/// Database configuration for connection pool
#[derive(Debug, Clone)]
pub struct SqlitePoolConfig {
    /// Path to the SQLite database file
    pub path: PathBuf,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Maximum time to wait for a connection
    pub acquire_timeout: Duration,
}

impl Default for SqlitePoolConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./meow.db"),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

impl SqlitePoolConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let path = std::env::var("MEOW_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./meow.db"));

        let max_connections = std::env::var("MEOW_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            path,
            max_connections,
            ..Default::default()
        }
    }
}

impl From<&meow_common::DatabaseConfig> for SqlitePoolConfig {
    fn from(config: &meow_common::DatabaseConfig) -> Self {
        Self {
            path: config.path.clone(),
            ..Default::default()
        }
    }
}

/// Schema statements, applied on every pool creation
const CREATE_MEOWS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS meows (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user TEXT NOT NULL,
        server_name TEXT NOT NULL,
        timestamp INTEGER NOT NULL
    )
";

const CREATE_USER_SERVER_INDEX: &str = r"
    CREATE INDEX IF NOT EXISTS idx_user_server ON meows(user, server_name)
";

/// Create a new SQLite connection pool and ensure the schema exists
pub async fn create_pool(config: &SqlitePoolConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    tracing::info!(path = %config.path.display(), "meow database ready");
    Ok(pool)
}

/// Create a connection pool from the MEOW_DB_PATH environment variable
pub async fn create_pool_from_env() -> Result<SqlitePool, sqlx::Error> {
    let config = SqlitePoolConfig::from_env();
    create_pool(&config).await
}

/// Apply the schema to an existing pool (idempotent)
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_MEOWS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_USER_SERVER_INDEX).execute(pool).await?;
    Ok(())
}
