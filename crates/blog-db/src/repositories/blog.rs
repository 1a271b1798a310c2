//! PostgreSQL implementation of BlogRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Blog;
use blog_core::traits::{BlogRepository, Page, PageRequest, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::mappers::polarity_to_bool;
use crate::models::BlogModel;

use super::error::{blog_not_found, map_db_error};

/// PostgreSQL implementation of BlogRepository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    /// Create a new PgBlogRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>> {
        let result = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, name, handle, positive, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Blog::from))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Blog>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, BlogModel>(
            r#"
            SELECT id, name, handle, positive, created_at, updated_at
            FROM blogs
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.per_page)
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = results.into_iter().map(Blog::from).collect();
        Ok(Page::new(items, total, request))
    }

    #[instrument(skip(self, blog))]
    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, name, handle, positive, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(blog.id.into_inner())
        .bind(&blog.name)
        .bind(&blog.handle)
        .bind(polarity_to_bool(blog.polarity))
        .bind(blog.created_at)
        .bind(blog.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, blog))]
    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET name = $2, handle = $3, positive = $4, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(blog.id.into_inner())
        .bind(&blog.name)
        .bind(&blog.handle)
        .bind(polarity_to_bool(blog.polarity))
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(blog_not_found(blog.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(blog_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgBlogRepository>();
    }
}
