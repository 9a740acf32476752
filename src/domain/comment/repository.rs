use crate::domain::engagement::errors::DomainError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Read-only collaborator interface onto comment storage. Comments feed the
/// trending score as a windowed count, nothing more.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn count_in_window(
        &self,
        post_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<i64, DomainError>;
}
