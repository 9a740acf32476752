use crate::domain::engagement::errors::DomainError;
use async_trait::async_trait;
use uuid::Uuid;

/// Read-only collaborator interface onto content storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn exists(&self, post_id: Uuid) -> Result<bool, DomainError>;

    /// Cumulative view counter. Views are not timestamped per event, so this
    /// is window-independent by construction.
    async fn view_count(&self, post_id: Uuid) -> Result<i64, DomainError>;
}
