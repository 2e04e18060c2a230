//! Application configuration structs
//!
//! Loads configuration from environment variables. Every key has a default,
//! so a bare environment yields a working config (current directory cache
//! root, local SQLite file, 60 second flush delay).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub cache: CacheConfig,
    pub database: DatabaseConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Write-back cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Root directory for persisted channel files
    pub root: PathBuf,
    /// Delay between the first buffered message and the flush, in milliseconds
    pub write_delay_ms: u64,
}

impl CacheConfig {
    /// The flush delay as a Duration
    #[must_use]
    pub fn write_delay(&self) -> Duration {
        Duration::from_millis(self.write_delay_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(default_cache_root()),
            write_delay_ms: default_write_delay_ms(),
        }
    }
}

/// Meow database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite file path
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(default_db_path()),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "meow-bot".to_string()
}

fn default_cache_root() -> String {
    "./messagecache".to_string()
}

fn default_write_delay_ms() -> u64 {
    60_000
}

fn default_db_path() -> String {
    "./meow.db".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `APP_NAME`, `APP_ENV`, `CACHE_ROOT`,
    /// `CACHE_WRITE_FREQUENCY` (flush delay in ms), `MEOW_DB_PATH`.
    /// Unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            cache: CacheConfig {
                root: env::var("CACHE_ROOT")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(default_cache_root())),
                write_delay_ms: env::var("CACHE_WRITE_FREQUENCY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_write_delay_ms),
            },
            database: DatabaseConfig {
                path: env::var("MEOW_DB_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(default_db_path())),
            },
        }
    }
}
