//! Write-back message cache
//!
//! Message and reaction events are buffered per channel and flushed to the
//! channel's JSON file after a configurable delay. Only the first message in
//! a window schedules the flush; everything that arrives before it fires is
//! appended to the same buffer or applied in place (reaction increments).
//!
//! The flush *takes* the buffer entry out of the map before touching the
//! disk, so the entry's presence is the only coordination between event
//! handlers and the flush task: a reaction for a taken (or never-buffered)
//! message id is silently dropped, and a message arriving while a flush is
//! in progress starts a brand-new buffer and timer cycle. This is the
//! documented loss window traded for low write amplification; crashes
//! during the window lose at most one window of buffered events per channel.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tokio::fs;
use tracing::{debug, info};

use meow_core::{MessageRecord, PlatformMessage, ReactionKind, Snowflake};

use crate::error::CacheResult;
use crate::layout::CacheLayout;

/// Write-back cache configuration
#[derive(Debug, Clone)]
pub struct WriteBackConfig {
    /// Root directory for persisted channel files
    pub root: std::path::PathBuf,
    /// Delay between the first buffered message and the flush
    pub write_delay: Duration,
}

impl Default for WriteBackConfig {
    fn default() -> Self {
        Self {
            root: std::path::PathBuf::from("./messagecache"),
            write_delay: Duration::from_millis(60_000),
        }
    }
}

impl From<&meow_common::CacheConfig> for WriteBackConfig {
    fn from(config: &meow_common::CacheConfig) -> Self {
        Self {
            root: config.root.clone(),
            write_delay: config.write_delay(),
        }
    }
}

/// Pending records for one channel, plus the names the flush path needs
#[derive(Debug)]
struct ChannelBuffer {
    guild_name: String,
    channel_name: String,
    records: Vec<MessageRecord>,
}

struct CacheInner {
    layout: CacheLayout,
    write_delay: Duration,
    buffers: DashMap<Snowflake, ChannelBuffer>,
}

/// Write-back message cache
///
/// Owns the channel-id → buffer mapping explicitly; constructed once and
/// torn down with the process. Cheap to clone (shared inner state), so event
/// handlers and the flush tasks all see the same buffers.
#[derive(Clone)]
pub struct WriteBackCache {
    inner: Arc<CacheInner>,
}

impl std::fmt::Debug for WriteBackCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteBackCache")
            .field("root", &self.inner.layout.root())
            .field("write_delay", &self.inner.write_delay)
            .field("buffered_channels", &self.inner.buffers.len())
            .finish()
    }
}

impl WriteBackCache {
    /// Create a cache with the given configuration
    pub fn new(config: WriteBackConfig) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                layout: CacheLayout::new(config.root),
                write_delay: config.write_delay,
                buffers: DashMap::new(),
            }),
        }
    }

    /// Create a cache from meow-common config
    pub fn from_config(config: &meow_common::CacheConfig) -> Self {
        Self::new(WriteBackConfig::from(config))
    }

    /// The on-disk layout this cache writes to
    pub fn layout(&self) -> &CacheLayout {
        &self.inner.layout
    }

    /// Whether a channel currently has a buffer (and therefore a pending flush)
    pub fn is_buffered(&self, channel_id: Snowflake) -> bool {
        self.inner.buffers.contains_key(&channel_id)
    }

    /// Buffer a message event
    ///
    /// The first record for a channel creates its buffer and schedules a
    /// single flush after the configured delay; later records append to the
    /// same buffer without rescheduling.
    pub fn buffer_message(&self, msg: &PlatformMessage) {
        let record = MessageRecord::from_platform(msg);
        match self.inner.buffers.entry(msg.channel_id) {
            Entry::Occupied(mut entry) => entry.get_mut().records.push(record),
            Entry::Vacant(entry) => {
                entry.insert(ChannelBuffer {
                    guild_name: msg.guild_name.clone(),
                    channel_name: msg.channel_name.clone(),
                    records: vec![record],
                });
                self.schedule_flush(msg.channel_id);
            }
        }
    }

    /// Apply a reaction event to a buffered message
    ///
    /// Increments the matching counter by exactly 1 on every buffered record
    /// with the message's id — a re-buffered duplicate replaces the earlier
    /// copy at flush time, so the reaction has to land on all of them for the
    /// surviving record to carry it. Untracked emoji and reactions for
    /// message ids not currently buffered are silently dropped; such a
    /// reaction only reaches disk if the message is re-buffered later.
    pub fn buffer_reaction(&self, msg: &PlatformMessage, emoji: &str) {
        let Some(kind) = ReactionKind::from_emoji(emoji) else {
            return;
        };
        if let Some(mut buffer) = self.inner.buffers.get_mut(&msg.channel_id) {
            let mut bumped = false;
            for record in buffer.records.iter_mut().filter(|r| r.id == msg.id) {
                record.bump(kind);
                bumped = true;
            }
            if bumped {
                return;
            }
        }
        debug!(
            channel_id = %msg.channel_id,
            message_id = %msg.id,
            "reaction for unbuffered message dropped"
        );
    }

    fn schedule_flush(&self, channel_id: Snowflake) {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            tokio::time::sleep(inner.write_delay).await;
            if let Err(e) = flush_channel(&inner, channel_id).await {
                // A failed file write is fatal for this flush: no retry, and
                // the taken buffer is gone (bounded loss, accepted tradeoff).
                panic!("cache flush for channel {channel_id} failed: {e}");
            }
        });
    }
}

/// Merge one channel's buffer into its persisted file
///
/// Takes the buffer entry first; records buffered in insertion order replace
/// same-id records already on disk wholesale (last writer wins) and are
/// appended otherwise.
async fn flush_channel(inner: &CacheInner, channel_id: Snowflake) -> CacheResult<()> {
    let Some((_, buffer)) = inner.buffers.remove(&channel_id) else {
        return Ok(());
    };

    let path = inner.layout.channel_file(&buffer.guild_name, channel_id);
    let mut persisted = read_records_or_empty(&path).await;

    for record in buffer.records {
        match persisted.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => {
                debug!(message_id = %record.id, "replacing persisted record with buffered version");
                *existing = record;
            }
            None => persisted.push(record),
        }
    }

    fs::create_dir_all(inner.layout.guild_dir(&buffer.guild_name)).await?;
    let json = serde_json::to_vec_pretty(&persisted)?;
    fs::write(&path, json).await?;

    info!(
        guild = %buffer.guild_name,
        channel = %buffer.channel_name,
        records = persisted.len(),
        "flushed channel cache"
    );
    Ok(())
}

/// Load the persisted records for a channel, recovering locally from a
/// missing or unparsable file by treating it as empty
async fn read_records_or_empty(path: &Path) -> Vec<MessageRecord> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unparsable channel file, starting empty");
                Vec::new()
            }
        },
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no readable channel file, starting empty");
            Vec::new()
        }
    }
}
