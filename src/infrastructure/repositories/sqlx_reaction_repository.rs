use crate::domain::engagement::{
    errors::DomainError,
    reaction::{Reaction, ReactionCounts, UserEngagementRow},
    repository::ReactionRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxReactionRepository {
    pub pool: PgPool,
}

impl SqlxReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map write failures, keeping the unique-index violation distinct: the
/// `(user_id, post_id)` index is the concurrency guard, and its violation is
/// the signal the service retries on.
fn map_write_err(e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::Conflict("reaction already exists for this user and post".into())
        }
        _ => DomainError::Storage(e.to_string()),
    }
}

#[async_trait]
impl ReactionRepository for SqlxReactionRepository {
    async fn find(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<Reaction>, DomainError> {
        let row = sqlx::query_as::<_, Reaction>(
            "SELECT id, user_id, post_id, is_like, created_at \
             FROM engagements WHERE user_id = $1 AND post_id = $2",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(row)
    }

    async fn create(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        is_like: bool,
    ) -> Result<Reaction, DomainError> {
        let row = sqlx::query_as::<_, Reaction>(
            "INSERT INTO engagements (id, user_id, post_id, is_like) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, user_id, post_id, is_like, created_at",
        )
        .bind(Uuid::now_v7())
        .bind(user_id)
        .bind(post_id)
        .bind(is_like)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_err)?;
        Ok(row)
    }

    async fn set_polarity(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        is_like: bool,
    ) -> Result<Reaction, DomainError> {
        // Single UPDATE, so a flip never passes through "none" observably.
        // created_at is deliberately left alone.
        let row = sqlx::query_as::<_, Reaction>(
            "UPDATE engagements SET is_like = $3 \
             WHERE user_id = $1 AND post_id = $2 \
             RETURNING id, user_id, post_id, is_like, created_at",
        )
        .bind(user_id)
        .bind(post_id)
        .bind(is_like)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        row.ok_or_else(|| DomainError::NotFound("no reaction to update".into()))
    }

    async fn delete(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM engagements WHERE user_id = $1 AND post_id = $2")
            .bind(user_id)
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(())
    }

    async fn count_by_post(&self, post_id: Uuid) -> Result<ReactionCounts, DomainError> {
        let counts = sqlx::query_as::<_, ReactionCounts>(
            "SELECT COUNT(*) FILTER (WHERE is_like) AS likes, \
                    COUNT(*) FILTER (WHERE NOT is_like) AS dislikes \
             FROM engagements WHERE post_id = $1",
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(counts)
    }

    async fn count_in_window(
        &self,
        post_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<ReactionCounts, DomainError> {
        let counts = sqlx::query_as::<_, ReactionCounts>(
            "SELECT COUNT(*) FILTER (WHERE is_like) AS likes, \
                    COUNT(*) FILTER (WHERE NOT is_like) AS dislikes \
             FROM engagements WHERE post_id = $1 AND created_at >= $2",
        )
        .bind(post_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(counts)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
        polarity: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UserEngagementRow>, DomainError> {
        let rows = sqlx::query_as::<_, UserEngagementRow>(
            "SELECT e.id, e.is_like, e.created_at, \
                    p.id AS post_id, p.title AS post_title, p.slug AS post_slug, \
                    p.excerpt AS post_excerpt, p.created_at AS post_created_at \
             FROM engagements e \
             JOIN posts p ON p.id = e.post_id \
             WHERE e.user_id = $1 AND ($2::boolean IS NULL OR e.is_like = $2) \
             ORDER BY e.created_at DESC \
             LIMIT $3 OFFSET $4",
        )
        .bind(user_id)
        .bind(polarity)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(rows)
    }

    async fn count_by_user(
        &self,
        user_id: Uuid,
        polarity: Option<bool>,
    ) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM engagements \
             WHERE user_id = $1 AND ($2::boolean IS NULL OR is_like = $2)",
        )
        .bind(user_id)
        .bind(polarity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(count)
    }
}
