//! Trending score computation and ordering.
//!
//! The score combines three signals for a post over a window:
//!
//! ```text
//! score = 2.0 * likes_in_window + 1.0 * comments_in_window + 0.1 * total_views
//! ```
//!
//! Likes and comments are windowed; views are cumulative (they carry no per
//! event timestamp). Ranking is pure: the caller supplies the signal rows,
//! this module only scores, orders and truncates.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub const LIKE_WEIGHT: f64 = 2.0;
pub const COMMENT_WEIGHT: f64 = 1.0;
pub const VIEW_WEIGHT: f64 = 0.1;

/// Fallback result size when the requested limit is absent or non-positive.
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw per-post counters collected for one window.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostSignals {
    pub post_id: Uuid,
    pub post_created_at: DateTime<Utc>,
    pub likes: i64,
    pub dislikes: i64,
    pub comments: i64,
    pub views: i64,
}

/// One entry of the ranked result.
#[derive(Debug, Clone)]
pub struct RankedPost {
    pub post_id: Uuid,
    pub post_created_at: DateTime<Utc>,
    pub score: f64,
    pub likes: i64,
    pub dislikes: i64,
    pub comments: i64,
    pub views: i64,
}

pub fn score(likes: i64, comments: i64, views: i64) -> f64 {
    LIKE_WEIGHT * likes as f64 + COMMENT_WEIGHT * comments as f64 + VIEW_WEIGHT * views as f64
}

/// Score, order and truncate the given signal rows.
///
/// Ordering is by score descending. The composite score has no inherent
/// tie-break, so exact ties fall back to post creation time descending and
/// then post id descending, which keeps the result deterministic across
/// runs.
pub fn rank(signals: Vec<PostSignals>, limit: i64) -> Vec<RankedPost> {
    let limit = if limit > 0 { limit } else { DEFAULT_LIMIT } as usize;

    let mut ranked: Vec<RankedPost> = signals
        .into_iter()
        .map(|s| RankedPost {
            score: score(s.likes, s.comments, s.views),
            post_id: s.post_id,
            post_created_at: s.post_created_at,
            likes: s.likes,
            dislikes: s.dislikes,
            comments: s.comments,
            views: s.views,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.post_created_at.cmp(&a.post_created_at))
            .then_with(|| b.post_id.cmp(&a.post_id))
    });
    ranked.truncate(limit);
    ranked
}
