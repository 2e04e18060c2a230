//! Meow database models

use sqlx::FromRow;

/// Aggregated leaderboard row (from query)
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardModel {
    pub user: String,
    pub total_count: i64,
}
