//! Domain entities - core business objects

mod filter;
mod meow;
mod message;
mod reaction;
mod record;

pub use filter::{FilterKind, FilterKindParseError};
pub use meow::{LeaderboardEntry, MeowEvent};
pub use message::PlatformMessage;
pub use reaction::ReactionKind;
pub use record::MessageRecord;
