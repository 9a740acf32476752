use crate::{
    application::{engagement::use_case::EngagementUseCase, trending::use_case::TrendingUseCase},
    config::Config,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub engagement: Arc<EngagementUseCase>,
    pub trending: Arc<TrendingUseCase>,
}
