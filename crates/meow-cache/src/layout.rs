//! On-disk layout of the persisted message cache
//!
//! One JSON array of message records per `(guild, channel)` pair:
//! `<root>/<guild_name>/<channel_id>.json`. Guild directories are created
//! on demand by the flush path.

use std::path::{Path, PathBuf};

use meow_core::Snowflake;

/// Path layout for persisted channel files
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
}

impl CacheLayout {
    /// Create a layout rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one guild's channel files
    pub fn guild_dir(&self, guild_name: &str) -> PathBuf {
        self.root.join(guild_name)
    }

    /// Persisted file for one channel
    pub fn channel_file(&self, guild_name: &str, channel_id: Snowflake) -> PathBuf {
        self.guild_dir(guild_name).join(format!("{channel_id}.json"))
    }
}
