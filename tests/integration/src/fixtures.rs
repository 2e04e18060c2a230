//! Test fixtures and data generators
//!
//! Provides reusable platform-event data for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use meow_core::{PlatformMessage, Snowflake};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Guild name shared by the default fixtures
pub const TEST_GUILD: &str = "cat cafe";

/// A plain text message event in the test guild
pub fn platform_message(channel_id: i64, id: i64, content: &str) -> PlatformMessage {
    PlatformMessage {
        id: Snowflake::new(id),
        channel_id: Snowflake::new(channel_id),
        channel_name: format!("channel-{channel_id}"),
        guild_id: Snowflake::new(100),
        guild_name: TEST_GUILD.to_string(),
        author_id: Snowflake::new(200),
        content: content.to_string(),
        attachments: Vec::new(),
        reactions: HashMap::new(),
    }
}

/// Same message, different author
pub fn from_author(mut msg: PlatformMessage, author_id: i64) -> PlatformMessage {
    msg.author_id = Snowflake::new(author_id);
    msg
}

/// Attach a URL to a message event
pub fn with_attachment(mut msg: PlatformMessage, url: &str) -> PlatformMessage {
    msg.attachments.push(url.to_string());
    msg
}

/// Set a pre-resolved reaction tally on a message event
pub fn with_reactions(mut msg: PlatformMessage, emoji: &str, count: u32) -> PlatformMessage {
    msg.reactions.insert(emoji.to_string(), count);
    msg
}
