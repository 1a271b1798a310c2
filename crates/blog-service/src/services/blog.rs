//! Blog service - blog CRUD

use tracing::{info, instrument};

use blog_core::entities::Blog;
use blog_core::error::DomainError;
use blog_core::traits::PageRequest;
use blog_core::value_objects::Snowflake;

use crate::dto::{BlogResponse, CreateBlogRequest, PageResponse, UpdateBlogRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Service for blog operations
#[derive(Clone)]
pub struct BlogService {
    ctx: ServiceContext,
}

impl BlogService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new blog
    #[instrument(skip(self, request))]
    pub async fn create_blog(&self, request: CreateBlogRequest) -> ServiceResult<BlogResponse> {
        let id = self.ctx.generate_id();
        let blog = Blog::new(id, request.name, request.handle, request.polarity);
        self.ctx.blog_repo().create(&blog).await?;

        info!(blog_id = %blog.id, polarity = %blog.polarity, "blog created");
        Ok(BlogResponse::from(&blog))
    }

    /// Get a blog by ID
    #[instrument(skip(self))]
    pub async fn get_blog(&self, id: Snowflake) -> ServiceResult<BlogResponse> {
        let blog = self
            .ctx
            .blog_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BlogNotFound(id))?;
        Ok(BlogResponse::from(&blog))
    }

    /// List blogs, paginated
    #[instrument(skip(self))]
    pub async fn list_blogs(
        &self,
        request: PageRequest,
    ) -> ServiceResult<PageResponse<BlogResponse>> {
        let page = self.ctx.blog_repo().find_page(request).await?;
        Ok(PageResponse::from_page(page))
    }

    /// Replace a blog
    ///
    /// Full-replace semantics; a polarity change does not retroactively
    /// re-validate existing entries.
    #[instrument(skip(self, request))]
    pub async fn update_blog(
        &self,
        id: Snowflake,
        request: UpdateBlogRequest,
    ) -> ServiceResult<BlogResponse> {
        let mut blog = self
            .ctx
            .blog_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::BlogNotFound(id))?;
        blog.replace(request.name, request.handle, request.polarity);
        self.ctx.blog_repo().update(&blog).await?;

        info!(blog_id = %blog.id, "blog updated");
        Ok(BlogResponse::from(&blog))
    }

    /// Delete a blog by ID
    #[instrument(skip(self))]
    pub async fn delete_blog(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.blog_repo().delete(id).await?;
        info!(blog_id = %id, "blog deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use blog_core::entities::Polarity;

    use crate::services::error::ServiceError;
    use crate::services::test_support::{
        context_with, InMemoryBlogRepository, InMemoryEntryRepository,
    };

    use super::*;

    fn service() -> (BlogService, Arc<InMemoryBlogRepository>) {
        let blog_repo = Arc::new(InMemoryBlogRepository::default());
        let entry_repo = Arc::new(InMemoryEntryRepository::default());
        let ctx = context_with(Arc::clone(&blog_repo), entry_repo);
        (BlogService::new(ctx), blog_repo)
    }

    fn create_request(name: &str, polarity: Polarity) -> CreateBlogRequest {
        CreateBlogRequest {
            name: name.to_string(),
            handle: name.to_lowercase().replace(' ', "-"),
            polarity,
        }
    }

    #[tokio::test]
    async fn test_create_blog_assigns_id() {
        let (service, blog_repo) = service();
        let response = service
            .create_blog(create_request("Sunny Side", Polarity::Positive))
            .await
            .unwrap();

        assert_ne!(response.id.into_inner(), 0);
        assert_eq!(response.polarity, Polarity::Positive);
        assert_eq!(blog_repo.len(), 1);
    }

    #[tokio::test]
    async fn test_get_blog_not_found() {
        let (service, _) = service();
        let err = service.get_blog(Snowflake::new(1)).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "blogNotFound");
    }

    #[tokio::test]
    async fn test_update_blog_replaces_fields() {
        let (service, _) = service();
        let created = service
            .create_blog(create_request("Old Name", Polarity::Positive))
            .await
            .unwrap();

        let updated = service
            .update_blog(
                created.id,
                UpdateBlogRequest {
                    name: "New Name".to_string(),
                    handle: "new".to_string(),
                    polarity: Polarity::Negative,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.polarity, Polarity::Negative);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_blog_is_not_found() {
        let (service, _) = service();
        let err = service
            .update_blog(
                Snowflake::new(9),
                UpdateBlogRequest {
                    name: "n".to_string(),
                    handle: "h".to_string(),
                    polarity: Polarity::Positive,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::BlogNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_blogs_paginates() {
        let (service, _) = service();
        for i in 0..3 {
            service
                .create_blog(create_request(&format!("Blog {i}"), Polarity::Positive))
                .await
                .unwrap();
        }

        let page = service.list_blogs(PageRequest::new(1, 2)).await.unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.pagination.total, 3);
    }

    #[tokio::test]
    async fn test_delete_blog() {
        let (service, blog_repo) = service();
        let created = service
            .create_blog(create_request("Doomed", Polarity::Negative))
            .await
            .unwrap();

        service.delete_blog(created.id).await.unwrap();
        assert_eq!(blog_repo.len(), 0);
    }
}
