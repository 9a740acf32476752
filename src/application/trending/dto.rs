use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingQuery {
    pub period: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendingEntry {
    pub post_id: Uuid,
    pub score: f64,
    pub likes: i64,
    pub dislikes: i64,
    pub comments: i64,
    pub views: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendingResponse {
    pub posts: Vec<TrendingEntry>,
    pub period: String,
    pub generated_at: DateTime<Utc>,
}
