pub mod sqlx_comment_repository;
pub mod sqlx_post_repository;
pub mod sqlx_reaction_repository;
pub mod sqlx_trending_repository;
