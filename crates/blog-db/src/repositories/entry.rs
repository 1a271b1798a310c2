//! PostgreSQL implementation of EntryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use blog_core::entities::Entry;
use blog_core::traits::{EntryRepository, Page, PageRequest, RepoResult};
use blog_core::value_objects::Snowflake;

use crate::mappers::entry_from_model;
use crate::models::EntryModel;

use super::error::{entry_not_found, map_db_error};

/// PostgreSQL implementation of EntryRepository
#[derive(Clone)]
pub struct PgEntryRepository {
    pool: PgPool,
}

impl PgEntryRepository {
    /// Create a new PgEntryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Entry>> {
        let result = sqlx::query_as::<_, EntryModel>(
            r#"
            SELECT id, blog_id, reaction, title, content, created_at, updated_at
            FROM entries
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(entry_from_model).transpose()
    }

    #[instrument(skip(self))]
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Entry>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, EntryModel>(
            r#"
            SELECT id, blog_id, reaction, title, content, created_at, updated_at
            FROM entries
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(request.per_page)
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = results
            .into_iter()
            .map(entry_from_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total, request))
    }

    #[instrument(skip(self))]
    async fn find_by_blog(
        &self,
        blog_id: Snowflake,
        request: PageRequest,
    ) -> RepoResult<Page<Entry>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM entries WHERE blog_id = $1")
            .bind(blog_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, EntryModel>(
            r#"
            SELECT id, blog_id, reaction, title, content, created_at, updated_at
            FROM entries
            WHERE blog_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(blog_id.into_inner())
        .bind(request.per_page)
        .bind(request.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let items = results
            .into_iter()
            .map(entry_from_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total, request))
    }

    #[instrument(skip(self, entry))]
    async fn create(&self, entry: &Entry) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO entries (id, blog_id, reaction, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(entry.id.into_inner())
        .bind(entry.blog_id.into_inner())
        .bind(entry.reaction.as_str())
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, entry))]
    async fn update(&self, entry: &Entry) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE entries
            SET blog_id = $2, reaction = $3, title = $4, content = $5, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(entry.id.into_inner())
        .bind(entry.blog_id.into_inner())
        .bind(entry.reaction.as_str())
        .bind(&entry.title)
        .bind(&entry.content)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(entry_not_found(entry.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(entry_not_found(id));
        }

        Ok(())
    }
}
