//! SQLite implementation of MeowRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use meow_core::entities::{LeaderboardEntry, MeowEvent};
use meow_core::traits::{MeowRepository, RepoResult};

use crate::models::LeaderboardModel;

use super::error::map_db_error;

/// SQLite implementation of MeowRepository
#[derive(Clone)]
pub struct SqliteMeowRepository {
    pool: SqlitePool,
}

impl SqliteMeowRepository {
    /// Create a new SqliteMeowRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeowRepository for SqliteMeowRepository {
    #[instrument(skip(self))]
    async fn append(&self, event: &MeowEvent) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO meows (user, server_name, timestamp)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&event.user)
        .bind(&event.server_name)
        .bind(event.timestamp)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn leaderboard(&self, server_name: &str) -> RepoResult<Vec<LeaderboardEntry>> {
        let results = sqlx::query_as::<_, LeaderboardModel>(
            r#"
            SELECT user, COUNT(*) as total_count
            FROM meows
            WHERE server_name = ?
            GROUP BY user
            ORDER BY total_count DESC
            "#,
        )
        .bind(server_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results
            .into_iter()
            .map(|row| LeaderboardEntry {
                user: row.user,
                total_count: row.total_count,
            })
            .collect())
    }
}
