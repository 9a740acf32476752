use super::helpers::{bearer_token_for, read_json, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::Utc;
use engagement_api::domain::trending::ranker::PostSignals;
use serde_json::Value;
use uuid::Uuid;

fn snapshot() -> Vec<PostSignals> {
    let now = Utc::now();
    vec![
        PostSignals {
            post_id: Uuid::now_v7(),
            post_created_at: now,
            likes: 5,
            dislikes: 0,
            comments: 0,
            views: 100,
        },
        PostSignals {
            post_id: Uuid::now_v7(),
            post_created_at: now,
            likes: 6,
            dislikes: 2,
            comments: 3,
            views: 0,
        },
    ]
}

async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

#[tokio::test]
async fn trending_orders_by_score_descending() {
    let app = spawn_app(vec![], snapshot());

    let res = get(&app, "/api/engagements/trending?period=1h").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body["period"], "1h");
    assert_eq!(body["posts"][0]["score"], 20.0);
    assert_eq!(body["posts"][1]["score"], 15.0);
}

#[tokio::test]
async fn trending_limit_truncates() {
    let app = spawn_app(vec![], snapshot());

    let body: Value = read_json(get(&app, "/api/engagements/trending?limit=1").await).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 1);
    assert_eq!(body["posts"][0]["likes"], 5);
}

#[tokio::test]
async fn unknown_period_falls_back_to_day() {
    let app = spawn_app(vec![], snapshot());

    let body: Value = read_json(get(&app, "/api/engagements/trending?period=century").await).await;
    assert_eq!(body["period"], "24h");
}

#[tokio::test]
async fn post_score_reflects_live_reactions() {
    let post = Uuid::now_v7();
    let app = spawn_app(vec![post], vec![]);
    let token = bearer_token_for(Uuid::now_v7());

    let toggle = Request::builder()
        .method("POST")
        .uri(format!("/api/engagements/posts/{}/toggle", post))
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .header(axum::http::header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(r#"{"is_like":true}"#))
        .unwrap();
    assert_eq!(send(&app, toggle).await.status(), StatusCode::OK);

    let uri = format!("/api/engagements/posts/{}/score?period=1h", post);
    let body: Value = read_json(get(&app, &uri).await).await;
    // one windowed like, no comments, no views
    assert_eq!(body["score"], 2.0);
    assert_eq!(body["likes"], 1);
}

#[tokio::test]
async fn post_score_for_unknown_post_is_not_found() {
    let app = spawn_app(vec![], vec![]);
    let uri = format!("/api/engagements/posts/{}/score", Uuid::now_v7());
    let res = get(&app, &uri).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn trending_with_no_posts_is_empty_not_an_error() {
    let app = spawn_app(vec![], vec![]);

    let res = get(&app, "/api/engagements/trending").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body["posts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn responses_carry_a_request_id_header() {
    let app = spawn_app(vec![], snapshot());

    let res = get(&app, "/api/engagements/trending").await;
    let id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert!(id.is_some_and(|v| Uuid::parse_str(&v).is_ok()));
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    // The lazy test pool points at a closed port, so the round-trip fails.
    let app = spawn_app(vec![], vec![]);

    let res = get(&app, "/health").await;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "down");
    assert_eq!(body["service"], "engagement-api");
}
