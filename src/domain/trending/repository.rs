use super::ranker::PostSignals;
use crate::domain::engagement::errors::DomainError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read-only source of per-post trending signals.
///
/// Returns one row per published post, with reaction and comment counts
/// restricted to `created_at >= since` and the cumulative view counter.
/// Posts with zero windowed engagement are included, they still score from
/// views.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendingRepository: Send + Sync {
    async fn signals_since(&self, since: DateTime<Utc>) -> Result<Vec<PostSignals>, DomainError>;
}
