//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Repository methods return real errors;
//! whether to absorb them (the store facade does, by design) is the
//! caller's explicit choice.

use async_trait::async_trait;

use crate::entities::{LeaderboardEntry, MeowEvent};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait MeowRepository: Send + Sync {
    /// Append one durable meow event
    async fn append(&self, event: &MeowEvent) -> RepoResult<()>;

    /// Per-user meow totals for a server, descending by count
    ///
    /// Ties are broken by the underlying store's default stable order.
    /// Unknown servers yield an empty list, not an error.
    async fn leaderboard(&self, server_name: &str) -> RepoResult<Vec<LeaderboardEntry>>;
}
