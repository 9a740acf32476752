use super::{
    handlers::{engagements, health, trending},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Engagements
        .route(
            "/api/engagements/posts/{post_id}/toggle",
            post(engagements::toggle_engagement),
        )
        .route(
            "/api/engagements/posts/{post_id}/stats",
            get(engagements::get_engagement_stats),
        )
        .route(
            "/api/engagements/user",
            get(engagements::get_user_engagements),
        )
        // Trending
        .route("/api/engagements/trending", get(trending::get_trending))
        .route(
            "/api/engagements/posts/{post_id}/score",
            get(trending::get_post_score),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
