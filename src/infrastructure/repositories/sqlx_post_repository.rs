use crate::domain::engagement::errors::DomainError;
use crate::domain::post::repository::PostRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

pub struct SqlxPostRepository {
    pub pool: PgPool,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn exists(&self, post_id: Uuid) -> Result<bool, DomainError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)"#,
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(exists)
    }

    async fn view_count(&self, post_id: Uuid) -> Result<i64, DomainError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT view_count FROM posts WHERE id = $1")
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        count.ok_or_else(|| DomainError::NotFound("post not found".into()))
    }
}
