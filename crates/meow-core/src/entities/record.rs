//! Message record - the canonical cached form of a message
//!
//! One record per message per channel file. Field names serialize in
//! camelCase so the persisted JSON matches what the command layer and any
//! pre-existing cache files expect.

use serde::{Deserialize, Serialize};

use crate::entities::{PlatformMessage, ReactionKind};
use crate::value_objects::Snowflake;

/// Canonical message record, identity `(channel_id, id)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRecord {
    pub channel_id: Snowflake,
    pub guild_id: Snowflake,
    pub id: Snowflake,
    pub author_id: Snowflake,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
    #[serde(default)]
    pub fire_reacts: u32,
    #[serde(default)]
    pub tomato_reacts: u32,
    #[serde(default)]
    pub sob_reacts: u32,
}

impl MessageRecord {
    /// Format a platform message into a record
    ///
    /// Pure and infallible: a reaction kind with no reactors resolves to 0
    /// and at most the first attachment URL is captured.
    pub fn from_platform(msg: &PlatformMessage) -> Self {
        Self {
            channel_id: msg.channel_id,
            guild_id: msg.guild_id,
            id: msg.id,
            author_id: msg.author_id,
            content: msg.content.clone(),
            attachment_url: msg.first_attachment().map(String::from),
            fire_reacts: msg.reaction_count(ReactionKind::Fire.emoji()),
            tomato_reacts: msg.reaction_count(ReactionKind::Tomato.emoji()),
            sob_reacts: msg.reaction_count(ReactionKind::Sob.emoji()),
        }
    }

    /// Count for one reaction kind
    pub fn reacts(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Fire => self.fire_reacts,
            ReactionKind::Tomato => self.tomato_reacts,
            ReactionKind::Sob => self.sob_reacts,
        }
    }

    /// Increment the counter for one reaction kind by 1
    pub fn bump(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Fire => self.fire_reacts += 1,
            ReactionKind::Tomato => self.tomato_reacts += 1,
            ReactionKind::Sob => self.sob_reacts += 1,
        }
    }

    /// Whether any tracked reaction counter is positive
    pub fn has_any_react(&self) -> bool {
        self.fire_reacts > 0 || self.tomato_reacts > 0 || self.sob_reacts > 0
    }

    /// Whether the message has something to show: non-empty text or a
    /// non-empty attachment URL
    pub fn has_visible_content(&self) -> bool {
        !self.content.is_empty()
            || self.attachment_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}
