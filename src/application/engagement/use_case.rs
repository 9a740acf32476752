use super::dto::UserEngagementView;
use crate::domain::engagement::errors::DomainError;
use crate::domain::engagement::reaction::{ReactionCounts, ReactionState};
use crate::domain::engagement::repository::ReactionRepository;
use crate::domain::engagement::toggle::{self, ToggleAction};
use crate::domain::post::entity::PostSummary;
use crate::domain::post::repository::PostRepository;
use crate::domain::shared::pagination::{PaginatedResponse, PaginationRequest};
use std::sync::Arc;
use uuid::Uuid;

/// Result of a toggle: the caller's state after the write plus fresh totals.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub reaction: ReactionState,
    pub stats: ReactionCounts,
}

#[derive(Debug, Clone)]
pub struct EngagementStats {
    pub counts: ReactionCounts,
    pub viewer_reaction: ReactionState,
}

pub struct EngagementUseCase {
    posts: Arc<dyn PostRepository>,
    reactions: Arc<dyn ReactionRepository>,
}

impl EngagementUseCase {
    pub fn new(posts: Arc<dyn PostRepository>, reactions: Arc<dyn ReactionRepository>) -> Self {
        Self { posts, reactions }
    }

    /// Toggle the user's reaction on a post.
    ///
    /// Reads the current reaction, runs the toggle state machine and applies
    /// the resulting store action. Each action is one atomic statement, so a
    /// concurrent toggle on the same pair surfaces as `Conflict` (our create
    /// lost the insert race) or `NotFound` (the row we meant to flip is
    /// gone). Both mean the read was stale; the whole read-decide-apply cycle
    /// is retried exactly once before the failure is surfaced.
    pub async fn toggle(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        requested_like: bool,
    ) -> Result<ToggleOutcome, DomainError> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::NotFound("post not found".into()));
        }

        let reaction = match self.apply_once(user_id, post_id, requested_like).await {
            Ok(state) => state,
            Err(DomainError::Conflict(_)) | Err(DomainError::NotFound(_)) => {
                tracing::debug!(%user_id, %post_id, "stale toggle read, retrying once");
                self.apply_once(user_id, post_id, requested_like).await?
            }
            Err(e) => return Err(e),
        };

        // Totals are recomputed from live rows after the write, never cached.
        let stats = self.reactions.count_by_post(post_id).await?;
        Ok(ToggleOutcome { reaction, stats })
    }

    async fn apply_once(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        requested_like: bool,
    ) -> Result<ReactionState, DomainError> {
        let current = self.reactions.find(user_id, post_id).await?;
        let decision = toggle::decide(ReactionState::from_row(current.as_ref()), requested_like);
        match decision.action {
            ToggleAction::Create(polarity) => {
                self.reactions.create(user_id, post_id, polarity).await?;
            }
            ToggleAction::SetPolarity(polarity) => {
                self.reactions
                    .set_polarity(user_id, post_id, polarity)
                    .await?;
            }
            ToggleAction::Remove => {
                self.reactions.delete(user_id, post_id).await?;
            }
        }
        Ok(decision.next)
    }

    /// Totals plus the viewer's own state. `viewer` is `None` for anonymous
    /// requests, which reads the same as "no reaction".
    pub async fn stats(
        &self,
        post_id: Uuid,
        viewer: Option<Uuid>,
    ) -> Result<EngagementStats, DomainError> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::NotFound("post not found".into()));
        }
        let counts = self.reactions.count_by_post(post_id).await?;
        let viewer_reaction = match viewer {
            Some(user_id) => {
                ReactionState::from_row(self.reactions.find(user_id, post_id).await?.as_ref())
            }
            None => ReactionState::None,
        };
        Ok(EngagementStats {
            counts,
            viewer_reaction,
        })
    }

    /// The user's own reactions, newest first, joined with post summaries.
    pub async fn user_engagements(
        &self,
        user_id: Uuid,
        polarity: Option<bool>,
        page: PaginationRequest,
    ) -> Result<PaginatedResponse<UserEngagementView>, DomainError> {
        let rows = self
            .reactions
            .find_by_user(user_id, polarity, page.limit, page.offset)
            .await?;
        let total = self.reactions.count_by_user(user_id, polarity).await?;
        let items = rows
            .into_iter()
            .map(|r| UserEngagementView {
                id: r.id,
                is_like: r.is_like,
                created_at: r.created_at,
                post: PostSummary {
                    id: r.post_id,
                    title: r.post_title,
                    slug: r.post_slug,
                    excerpt: r.post_excerpt,
                    created_at: r.post_created_at,
                },
            })
            .collect();
        Ok(PaginatedResponse {
            items,
            total,
            limit: page.limit,
            offset: page.offset,
        })
    }
}
