use super::errors::DomainError;
use super::reaction::{Reaction, ReactionCounts, UserEngagementRow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Durable storage of reactions, one row per `(user, post)` pair.
///
/// Implementations must enforce pair uniqueness at the storage layer so that
/// concurrent creators cannot both succeed; the loser sees
/// [`DomainError::Conflict`]. Every mutating method is a single atomic
/// statement, there is no multi-step write to leave half done.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReactionRepository: Send + Sync {
    async fn find(&self, user_id: Uuid, post_id: Uuid) -> Result<Option<Reaction>, DomainError>;

    /// Insert a new reaction. `Conflict` if the pair already has one.
    async fn create(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        is_like: bool,
    ) -> Result<Reaction, DomainError>;

    /// Flip an existing reaction's polarity. `NotFound` if no row exists;
    /// `created_at` is preserved.
    async fn set_polarity(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        is_like: bool,
    ) -> Result<Reaction, DomainError>;

    /// Remove the pair's reaction. No-op if absent.
    async fn delete(&self, user_id: Uuid, post_id: Uuid) -> Result<(), DomainError>;

    async fn count_by_post(&self, post_id: Uuid) -> Result<ReactionCounts, DomainError>;

    async fn count_in_window(
        &self,
        post_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<ReactionCounts, DomainError>;

    /// A user's reactions, newest first, optionally filtered by polarity.
    async fn find_by_user(
        &self,
        user_id: Uuid,
        polarity: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<UserEngagementRow>, DomainError>;

    async fn count_by_user(
        &self,
        user_id: Uuid,
        polarity: Option<bool>,
    ) -> Result<i64, DomainError>;
}
