use super::helpers::{bearer_token_for, read_json, send, spawn_app};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use uuid::Uuid;

fn toggle_request(post_id: Uuid, token: &str, is_like: bool) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/api/engagements/posts/{}/toggle", post_id))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(json!({ "is_like": is_like }).to_string()))
        .expect("failed to build toggle request")
}

#[tokio::test]
async fn toggle_without_token_is_unauthorized() {
    let post = Uuid::now_v7();
    let app = spawn_app(vec![post], vec![]);

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/engagements/posts/{}/toggle", post))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "is_like": true }).to_string()))
        .unwrap();
    let res = send(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn toggle_with_garbage_token_is_unauthorized() {
    let post = Uuid::now_v7();
    let app = spawn_app(vec![post], vec![]);

    let req = Request::builder()
        .method("POST")
        .uri(format!("/api/engagements/posts/{}/toggle", post))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::from(json!({ "is_like": true }).to_string()))
        .unwrap();
    let res = send(&app, req).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn toggle_on_unknown_post_is_not_found() {
    let app = spawn_app(vec![], vec![]);
    let token = bearer_token_for(Uuid::now_v7());

    let res = send(&app, toggle_request(Uuid::now_v7(), &token, true)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn toggle_like_then_like_again_removes_the_reaction() {
    let post = Uuid::now_v7();
    let app = spawn_app(vec![post], vec![]);
    let token = bearer_token_for(Uuid::now_v7());

    let res = send(&app, toggle_request(post, &token, true)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body["reaction"], json!(true));
    assert_eq!(body["stats"], json!({ "likes": 1, "dislikes": 0 }));

    let res = send(&app, toggle_request(post, &token, true)).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["reaction"], Value::Null);
    assert_eq!(body["stats"], json!({ "likes": 0, "dislikes": 0 }));
}

#[tokio::test]
async fn toggle_like_then_dislike_flips_the_reaction() {
    let post = Uuid::now_v7();
    let app = spawn_app(vec![post], vec![]);
    let token = bearer_token_for(Uuid::now_v7());

    send(&app, toggle_request(post, &token, true)).await;
    let res = send(&app, toggle_request(post, &token, false)).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["reaction"], json!(false));
    assert_eq!(body["stats"], json!({ "likes": 0, "dislikes": 1 }));
}

#[tokio::test]
async fn two_users_contribute_independent_reactions() {
    let post = Uuid::now_v7();
    let app = spawn_app(vec![post], vec![]);

    send(&app, toggle_request(post, &bearer_token_for(Uuid::now_v7()), true)).await;
    let res = send(&app, toggle_request(post, &bearer_token_for(Uuid::now_v7()), false)).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["stats"], json!({ "likes": 1, "dislikes": 1 }));
}

#[tokio::test]
async fn stats_shows_viewer_reaction_only_with_token() {
    let post = Uuid::now_v7();
    let app = spawn_app(vec![post], vec![]);
    let token = bearer_token_for(Uuid::now_v7());
    send(&app, toggle_request(post, &token, true)).await;

    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/engagements/posts/{}/stats", post))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let body: Value = read_json(send(&app, req).await).await;
    assert_eq!(body["viewer_reaction"], json!(true));
    assert_eq!(body["stats"]["likes"], json!(1));

    let anon = Request::builder()
        .method("GET")
        .uri(format!("/api/engagements/posts/{}/stats", post))
        .body(Body::empty())
        .unwrap();
    let body: Value = read_json(send(&app, anon).await).await;
    assert_eq!(body["viewer_reaction"], Value::Null);
}

#[tokio::test]
async fn user_engagements_lists_own_reactions_with_pagination() {
    let (p1, p2) = (Uuid::now_v7(), Uuid::now_v7());
    let app = spawn_app(vec![p1, p2], vec![]);
    let user = Uuid::now_v7();
    let token = bearer_token_for(user);
    send(&app, toggle_request(p1, &token, true)).await;
    send(&app, toggle_request(p2, &token, false)).await;

    let req = Request::builder()
        .method("GET")
        .uri("/api/engagements/user?type=likes")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let res = send(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = read_json(res).await;
    assert_eq!(body["pagination"]["total"], json!(1));
    assert_eq!(body["engagements"][0]["is_like"], json!(true));
}

#[tokio::test]
async fn user_engagements_rejects_out_of_range_pagination() {
    let app = spawn_app(vec![], vec![]);
    let token = bearer_token_for(Uuid::now_v7());

    let req = Request::builder()
        .method("GET")
        .uri("/api/engagements/user?limit=500")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let res = send(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
