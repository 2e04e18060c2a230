//! Test helpers for integration tests
//!
//! Provides unique temp cache roots, in-memory database pools, and a poll
//! helper for observing flush completion without hooking the timer.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use anyhow::{bail, Result};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use meow_cache::{WriteBackCache, WriteBackConfig};
use meow_core::MessageRecord;
use meow_db::pool::init_schema;

/// Counter for unique cache roots
static ROOT_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Flush delay used by test caches
pub const TEST_WRITE_DELAY: Duration = Duration::from_millis(50);

/// A unique, not-yet-created temp directory for one test
pub fn unique_cache_root(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "meow-integration-{}-{}-{}",
        tag,
        std::process::id(),
        ROOT_COUNTER.fetch_add(1, Ordering::SeqCst)
    ))
}

/// A cache with a short flush delay rooted in a unique temp directory
pub fn test_cache(tag: &str) -> WriteBackCache {
    WriteBackCache::new(WriteBackConfig {
        root: unique_cache_root(tag),
        write_delay: TEST_WRITE_DELAY,
    })
}

/// Poll a channel file until it parses to the expected record count
pub async fn wait_for_records(path: &Path, expected: usize) -> Result<Vec<MessageRecord>> {
    for _ in 0..400 {
        if let Ok(bytes) = tokio::fs::read(path).await {
            if let Ok(records) = serde_json::from_slice::<Vec<MessageRecord>>(&bytes) {
                if records.len() == expected {
                    return Ok(records);
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    bail!("timed out waiting for {expected} records in {}", path.display());
}

/// An in-memory SQLite pool with the meow schema applied
pub async fn memory_pool() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}
