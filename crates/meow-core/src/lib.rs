//! # meow-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, filesystem, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    FilterKind, FilterKindParseError, LeaderboardEntry, MeowEvent, MessageRecord, PlatformMessage,
    ReactionKind,
};
pub use error::DomainError;
pub use traits::{MeowRepository, RepoResult};
pub use value_objects::{Snowflake, SnowflakeParseError};
