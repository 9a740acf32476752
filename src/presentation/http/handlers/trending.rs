use crate::application::trending::dto::{TrendingEntry, TrendingQuery, TrendingResponse};
use crate::domain::trending::{ranker, window::TrendingWindow};
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

pub async fn get_trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<TrendingResponse>, AppError> {
    let window = TrendingWindow::parse(query.period.as_deref().unwrap_or("24h"));
    let limit = query.limit.unwrap_or(ranker::DEFAULT_LIMIT);

    let response = state.trending.trending(window, limit).await?;
    Ok(Json(response))
}

pub async fn get_post_score(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    Query(query): Query<TrendingQuery>,
) -> Result<Json<TrendingEntry>, AppError> {
    let window = TrendingWindow::parse(query.period.as_deref().unwrap_or("24h"));
    let entry = state.trending.post_score(post_id, window).await?;
    Ok(Json(entry))
}
