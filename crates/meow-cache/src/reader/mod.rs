//! Filtered reader over persisted channel files
//!
//! Reads whatever the flush path last wrote, independent of any in-memory
//! buffer state. There is no isolation from a concurrent flush: a caller may
//! observe a stale or mid-write file and must tolerate eventual consistency.

use tokio::fs;
use tracing::instrument;

use meow_core::{FilterKind, MessageRecord, Snowflake};

use crate::error::CacheResult;
use crate::layout::CacheLayout;

/// Load every persisted record for a guild that passes the filter
///
/// Enumerates all channel files under the guild's directory and applies,
/// per record: an optional exact-match filter on the author id, then the
/// filter kind. Results are flat, in file-enumeration then in-file order;
/// no global ordering is guaranteed. A missing guild directory or an
/// unparsable file is an error here (unlike the flush path, which recovers
/// locally).
#[instrument(skip(layout))]
pub async fn read_server_channels(
    layout: &CacheLayout,
    guild_name: &str,
    filter: FilterKind,
    author: Option<Snowflake>,
) -> CacheResult<Vec<MessageRecord>> {
    let dir = layout.guild_dir(guild_name);
    let mut messages = Vec::new();

    let mut entries = fs::read_dir(&dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let bytes = fs::read(entry.path()).await?;
        let records: Vec<MessageRecord> = serde_json::from_slice(&bytes)?;
        for record in records {
            if author.is_some_and(|a| a != record.author_id) {
                continue;
            }
            if filter.matches(&record) {
                messages.push(record);
            }
        }
    }

    Ok(messages)
}
