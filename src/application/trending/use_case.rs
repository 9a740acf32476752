use super::dto::{TrendingEntry, TrendingResponse};
use crate::domain::comment::repository::CommentRepository;
use crate::domain::engagement::errors::DomainError;
use crate::domain::engagement::repository::ReactionRepository;
use crate::domain::post::repository::PostRepository;
use crate::domain::trending::ranker;
use crate::domain::trending::repository::TrendingRepository;
use crate::domain::trending::window::TrendingWindow;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct TrendingUseCase {
    signals: Arc<dyn TrendingRepository>,
    posts: Arc<dyn PostRepository>,
    reactions: Arc<dyn ReactionRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl TrendingUseCase {
    pub fn new(
        signals: Arc<dyn TrendingRepository>,
        posts: Arc<dyn PostRepository>,
        reactions: Arc<dyn ReactionRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            signals,
            posts,
            reactions,
            comments,
        }
    }

    /// Rank posts for the window. Point-in-time and read-only: the snapshot
    /// is taken against whatever the store holds at query time, nothing is
    /// persisted. Uses the batched signal query, one pass over all published
    /// posts.
    pub async fn trending(
        &self,
        window: TrendingWindow,
        limit: i64,
    ) -> Result<TrendingResponse, DomainError> {
        let now = Utc::now();
        let rows = self.signals.signals_since(window.since(now)).await?;
        let posts = ranker::rank(rows, limit)
            .into_iter()
            .map(|p| TrendingEntry {
                post_id: p.post_id,
                score: p.score,
                likes: p.likes,
                dislikes: p.dislikes,
                comments: p.comments,
                views: p.views,
            })
            .collect();
        Ok(TrendingResponse {
            posts,
            period: window.as_str().to_string(),
            generated_at: now,
        })
    }

    /// Score a single post for the window, assembled from the narrow
    /// collaborator interfaces instead of the batched snapshot query.
    pub async fn post_score(
        &self,
        post_id: Uuid,
        window: TrendingWindow,
    ) -> Result<TrendingEntry, DomainError> {
        if !self.posts.exists(post_id).await? {
            return Err(DomainError::NotFound("post not found".into()));
        }
        let since = window.since(Utc::now());
        let reactions = self.reactions.count_in_window(post_id, since).await?;
        let comments = self.comments.count_in_window(post_id, since).await?;
        let views = self.posts.view_count(post_id).await?;
        Ok(TrendingEntry {
            post_id,
            score: ranker::score(reactions.likes, comments, views),
            likes: reactions.likes,
            dislikes: reactions.dislikes,
            comments,
            views,
        })
    }
}
