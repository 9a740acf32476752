use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One user's stored stance on one post.
///
/// At most one row exists per `(user_id, post_id)` pair; the database unique
/// index is the authority for that invariant. `created_at` is set on creation
/// and never touched again, a polarity flip only mutates `is_like`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
}

/// The three observable states of a viewer's reaction.
///
/// "No row" is a real state, modelled explicitly instead of as a nullable
/// bool so the toggle state machine can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionState {
    Liked,
    Disliked,
    None,
}

impl ReactionState {
    pub fn from_row(row: Option<&Reaction>) -> Self {
        Self::from_is_like(row.map(|r| r.is_like))
    }

    pub fn from_is_like(is_like: Option<bool>) -> Self {
        match is_like {
            Some(true) => Self::Liked,
            Some(false) => Self::Disliked,
            None => Self::None,
        }
    }

    /// Wire representation: `true` / `false` / `null`.
    pub fn as_is_like(self) -> Option<bool> {
        match self {
            Self::Liked => Some(true),
            Self::Disliked => Some(false),
            Self::None => None,
        }
    }
}

/// Like/dislike totals for a post, always recomputed from live rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS, sqlx::FromRow)]
#[ts(export)]
pub struct ReactionCounts {
    pub likes: i64,
    pub dislikes: i64,
}

/// A reaction joined with a summary of the post it targets, for the
/// "my engagements" listing. Flat row shape to match the SQL projection.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserEngagementRow {
    pub id: Uuid,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
    pub post_id: Uuid,
    pub post_title: String,
    pub post_slug: String,
    pub post_excerpt: Option<String>,
    pub post_created_at: DateTime<Utc>,
}
