use chrono::{Duration, Utc};
use engagement_api::domain::trending::ranker::{self, PostSignals};
use uuid::Uuid;

fn post(likes: i64, comments: i64, views: i64) -> PostSignals {
    PostSignals {
        post_id: Uuid::now_v7(),
        post_created_at: Utc::now(),
        likes,
        dislikes: 0,
        comments,
        views,
    }
}

#[test]
fn five_likes_and_hundred_views_score_twenty() {
    assert_eq!(ranker::score(5, 0, 100), 20.0);
}

#[test]
fn dislikes_do_not_feed_the_score() {
    let mut a = post(2, 1, 0);
    a.dislikes = 50;
    let ranked = ranker::rank(vec![a], 10);
    assert_eq!(ranked[0].score, 5.0);
    assert_eq!(ranked[0].dislikes, 50);
}

#[test]
fn limit_one_returns_only_the_top_post() {
    let ranked = ranker::rank(vec![post(5, 0, 100), post(5, 5, 0)], 1);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 20.0);
    assert_eq!(ranked[1..].len(), 0);
}

#[test]
fn cold_posts_rank_purely_by_views() {
    let ranked = ranker::rank(vec![post(0, 0, 300), post(0, 0, 100)], 10);
    assert_eq!(ranked[0].score, 30.0);
    assert_eq!(ranked[1].score, 10.0);
}

#[test]
fn tie_break_is_deterministic_newest_first() {
    let now = Utc::now();
    let mut old = post(1, 0, 0);
    old.post_created_at = now - Duration::days(1);
    let mut new = post(1, 0, 0);
    new.post_created_at = now;

    for input in [vec![old.clone(), new.clone()], vec![new.clone(), old.clone()]] {
        let ranked = ranker::rank(input, 10);
        assert_eq!(ranked[0].post_id, new.post_id);
        assert_eq!(ranked[1].post_id, old.post_id);
    }
}
