//! Reaction kind - the three emoji categories this subsystem aggregates

/// Tracked reaction kind
///
/// Only these three emoji are counted; every other reaction on a message is
/// ignored by the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Fire,
    Tomato,
    Sob,
}

impl ReactionKind {
    /// All tracked kinds, in counter order
    pub const ALL: [Self; 3] = [Self::Fire, Self::Tomato, Self::Sob];

    /// Resolve a raw emoji string to a tracked kind, if it is one
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        match emoji {
            "🔥" => Some(Self::Fire),
            "🍅" => Some(Self::Tomato),
            "😭" => Some(Self::Sob),
            _ => None,
        }
    }

    /// The emoji this kind counts
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Fire => "🔥",
            Self::Tomato => "🍅",
            Self::Sob => "😭",
        }
    }
}
