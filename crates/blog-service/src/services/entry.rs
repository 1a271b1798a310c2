//! Entry service - entry CRUD with mood consistency checks
//!
//! Create and update run the mood validator against the parent blog before
//! anything is persisted. Reads and deletes are plain repository passthroughs.

use tracing::{info, instrument, warn};

use blog_core::entities::Entry;
use blog_core::error::DomainError;
use blog_core::traits::PageRequest;
use blog_core::validation::validate_entry;
use blog_core::value_objects::Snowflake;

use crate::dto::{EntryRequest, EntryResponse, PageResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Service for entry operations
#[derive(Clone)]
pub struct EntryService {
    ctx: ServiceContext,
}

impl EntryService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new entry
    ///
    /// The request must not carry an ID, the store assigns one. The entry is
    /// checked against the parent blog's mood before it is written; if the
    /// parent blog does not exist the check is skipped.
    #[instrument(skip(self, request))]
    pub async fn create_entry(&self, request: EntryRequest) -> ServiceResult<EntryResponse> {
        if request.id.is_some() {
            return Err(DomainError::IdExists.into());
        }

        self.check_mood(&request).await?;

        let id = self.ctx.generate_id();
        let entry = Entry::new(
            id,
            request.blog_id,
            request.reaction,
            request.title,
            request.content,
        );
        self.ctx.entry_repo().create(&entry).await?;

        info!(entry_id = %entry.id, blog_id = %entry.blog_id, "entry created");
        Ok(EntryResponse::from(&entry))
    }

    /// Replace an existing entry
    ///
    /// The request must carry the ID of the entry to replace. The replacement
    /// is subject to the same mood check as create.
    #[instrument(skip(self, request))]
    pub async fn update_entry(&self, request: EntryRequest) -> ServiceResult<EntryResponse> {
        let id = request.id.ok_or(DomainError::IdMissing)?;

        self.check_mood(&request).await?;

        let mut entry = self
            .ctx
            .entry_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EntryNotFound(id))?;
        entry.blog_id = request.blog_id;
        entry.replace(request.reaction, request.title, request.content);
        self.ctx.entry_repo().update(&entry).await?;

        info!(entry_id = %entry.id, "entry updated");
        Ok(EntryResponse::from(&entry))
    }

    /// Get an entry by ID
    #[instrument(skip(self))]
    pub async fn get_entry(&self, id: Snowflake) -> ServiceResult<EntryResponse> {
        let entry = self
            .ctx
            .entry_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::EntryNotFound(id))?;
        Ok(EntryResponse::from(&entry))
    }

    /// List entries, paginated
    #[instrument(skip(self))]
    pub async fn list_entries(
        &self,
        request: PageRequest,
    ) -> ServiceResult<PageResponse<EntryResponse>> {
        let page = self.ctx.entry_repo().find_page(request).await?;
        Ok(PageResponse::from_page(page))
    }

    /// List the entries of one blog, paginated
    #[instrument(skip(self))]
    pub async fn list_blog_entries(
        &self,
        blog_id: Snowflake,
        request: PageRequest,
    ) -> ServiceResult<PageResponse<EntryResponse>> {
        let page = self.ctx.entry_repo().find_by_blog(blog_id, request).await?;
        Ok(PageResponse::from_page(page))
    }

    /// Delete an entry by ID
    #[instrument(skip(self))]
    pub async fn delete_entry(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.entry_repo().delete(id).await?;
        info!(entry_id = %id, "entry deleted");
        Ok(())
    }

    /// Run the mood validator against the parent blog.
    ///
    /// An unknown parent blog skips validation rather than failing, entries
    /// may reference blogs this store does not know about.
    async fn check_mood(&self, request: &EntryRequest) -> ServiceResult<()> {
        match self.ctx.blog_repo().find_by_id(request.blog_id).await? {
            Some(blog) => {
                validate_entry(
                    blog.polarity,
                    request.reaction,
                    &request.title,
                    &request.content,
                )?;
            }
            None => {
                warn!(blog_id = %request.blog_id, "parent blog not found, skipping mood check");
            }
        }
        Ok(())
    }
}
