use crate::domain::engagement::errors::DomainError;
use crate::domain::trending::ranker::PostSignals;
use crate::domain::trending::repository::TrendingRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

pub struct SqlxTrendingRepository {
    pub pool: PgPool,
}

impl SqlxTrendingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrendingRepository for SqlxTrendingRepository {
    async fn signals_since(&self, since: DateTime<Utc>) -> Result<Vec<PostSignals>, DomainError> {
        // One grouped pass over published posts. Reactions and comments are
        // windowed by the join condition; views are cumulative. Ordering and
        // truncation happen in the ranker, not here.
        let rows = sqlx::query_as::<_, PostSignals>(
            "SELECT p.id AS post_id, \
                    p.created_at AS post_created_at, \
                    COUNT(DISTINCT e.id) FILTER (WHERE e.is_like) AS likes, \
                    COUNT(DISTINCT e.id) FILTER (WHERE NOT e.is_like) AS dislikes, \
                    COUNT(DISTINCT c.id) AS comments, \
                    p.view_count AS views \
             FROM posts p \
             LEFT JOIN engagements e ON e.post_id = p.id AND e.created_at >= $1 \
             LEFT JOIN comments c ON c.post_id = p.id AND c.created_at >= $1 \
             WHERE p.published \
             GROUP BY p.id",
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(rows)
    }
}
