//! Meow event - a single countable user action
//!
//! Append-only: events are never updated or deleted, and the leaderboard is
//! recomputed from them on every query rather than materialized.

use chrono::Utc;

/// One recorded meow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeowEvent {
    /// Author id of the meowing user, carried as text end to end
    pub user: String,
    pub server_name: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl MeowEvent {
    /// Create an event stamped with the current time
    pub fn new(user: impl Into<String>, server_name: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            server_name: server_name.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Create an event with an explicit timestamp (epoch milliseconds)
    pub fn at(
        user: impl Into<String>,
        server_name: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            user: user.into(),
            server_name: server_name.into(),
            timestamp,
        }
    }
}

/// One leaderboard row: a user and their total meow count for a server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub user: String,
    pub total_count: i64,
}
