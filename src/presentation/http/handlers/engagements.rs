use crate::application::engagement::dto::{
    EngagementStatsResponse, ToggleRequest, ToggleResponse, UserEngagementsQuery,
};
use crate::domain::shared::pagination::PaginationRequest;
use crate::presentation::http::{
    errors::AppError,
    middleware::user::{decode_optional_user_claims, decode_required_user_claims},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

fn user_id_from_claims(sub: &str) -> Result<Uuid, AppError> {
    Uuid::from_str(sub).map_err(|_| AppError::Unauthorized("Invalid token subject".to_string()))
}

pub async fn toggle_engagement(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let user_id = user_id_from_claims(&claims.sub)?;

    let outcome = state.engagement.toggle(user_id, post_id, body.is_like).await?;
    Ok(Json(ToggleResponse {
        reaction: outcome.reaction.as_is_like(),
        stats: outcome.stats,
    }))
}

pub async fn get_engagement_stats(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<EngagementStatsResponse>, AppError> {
    // Stats are public; the viewer's own reaction is only resolved when a
    // valid token is present.
    let viewer = decode_optional_user_claims(&headers, &state.config.jwt_secret)
        .and_then(|c| Uuid::from_str(&c.sub).ok());

    let stats = state.engagement.stats(post_id, viewer).await?;
    Ok(Json(EngagementStatsResponse {
        stats: stats.counts,
        viewer_reaction: stats.viewer_reaction.as_is_like(),
    }))
}

pub async fn get_user_engagements(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<UserEngagementsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let user_id = user_id_from_claims(&claims.sub)?;

    query
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let defaults = PaginationRequest::default();
    let limit = query.limit.unwrap_or(defaults.limit);
    let page = query.page.unwrap_or(1);
    let pagination = PaginationRequest {
        limit,
        offset: (page - 1) * limit,
    };

    let result = state
        .engagement
        .user_engagements(user_id, query.polarity_filter(), pagination)
        .await?;

    Ok(Json(serde_json::json!({
        "engagements": result.items,
        "pagination": {
            "page": page,
            "limit": result.limit,
            "total": result.total,
            "pages": (result.total + result.limit - 1) / result.limit,
        }
    })))
}
