//! Meow store facade - the lossy surface the event handlers call
//!
//! The repository returns real errors; this facade is where the
//! availability-over-correctness policy lives. Recording is fire-and-forget
//! (a failed insert is logged and swallowed, the caller observes success)
//! and a failed leaderboard query degrades to an empty list.

use tracing::{error, warn};

use meow_core::entities::{LeaderboardEntry, MeowEvent};
use meow_core::traits::MeowRepository;

use crate::pool::SqlitePool;
use crate::repositories::SqliteMeowRepository;

/// Lossy facade over the meow repository
#[derive(Clone)]
pub struct MeowStore {
    repo: SqliteMeowRepository,
}

impl MeowStore {
    /// Create a new MeowStore over a pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: SqliteMeowRepository::new(pool),
        }
    }

    /// Record one meow event, absorbing any persistence failure
    pub async fn record_event(&self, event: &MeowEvent) {
        if let Err(e) = self.repo.append(event).await {
            warn!(
                user = %event.user,
                server = %event.server_name,
                error = %e,
                "failed to record meow, dropping event"
            );
        }
    }

    /// Leaderboard for a server; a query failure yields an empty list
    pub async fn leaderboard(&self, server_name: &str) -> Vec<LeaderboardEntry> {
        match self.repo.leaderboard(server_name).await {
            Ok(entries) => entries,
            Err(e) => {
                error!(server = %server_name, error = %e, "leaderboard query failed");
                Vec::new()
            }
        }
    }
}
