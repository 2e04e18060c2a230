//! Platform message - the collaborator-facing view of a chat message
//!
//! The chat-platform client hands us message objects; this type models the
//! subset of fields the cache actually consumes. Reaction counts come
//! pre-resolved as an emoji → count map (the platform's `reactions.resolve`
//! surface flattened into data).

use std::collections::HashMap;

use crate::value_objects::Snowflake;

/// A message event as delivered by the chat platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMessage {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub channel_name: String,
    pub guild_id: Snowflake,
    pub guild_name: String,
    pub author_id: Snowflake,
    pub content: String,
    /// Attachment URLs in platform order; only the first is ever persisted
    pub attachments: Vec<String>,
    /// Current reaction tally per emoji
    pub reactions: HashMap<String, u32>,
}

impl PlatformMessage {
    /// Current count for an emoji; an emoji with no reactors resolves to 0
    pub fn reaction_count(&self, emoji: &str) -> u32 {
        self.reactions.get(emoji).copied().unwrap_or(0)
    }

    /// First attachment URL, if any
    pub fn first_attachment(&self) -> Option<&str> {
        self.attachments.first().map(String::as_str)
    }
}
