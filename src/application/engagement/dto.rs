use crate::domain::engagement::reaction::ReactionCounts;
use crate::domain::post::entity::PostSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToggleRequest {
    pub is_like: bool,
}

/// `reaction` is the viewer's state after the toggle: `true` liked,
/// `false` disliked, `null` no reaction.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToggleResponse {
    pub reaction: Option<bool>,
    pub stats: ReactionCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EngagementStatsResponse {
    pub stats: ReactionCounts,
    pub viewer_reaction: Option<bool>,
}

/// Query string for the "my engagements" listing.
///
/// `type` filters by polarity ("likes" / "dislikes", anything else means no
/// filter, matching how unknown filters have always been ignored).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserEngagementsQuery {
    #[validate(range(min = 1))]
    pub page: Option<i64>,
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl UserEngagementsQuery {
    pub fn polarity_filter(&self) -> Option<bool> {
        match self.kind.as_deref() {
            Some("likes") => Some(true),
            Some("dislikes") => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserEngagementView {
    pub id: Uuid,
    pub is_like: bool,
    pub created_at: DateTime<Utc>,
    pub post: PostSummary,
}
