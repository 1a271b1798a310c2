//! Service context - dependency container for services
//!
//! Holds the repositories and the ID generator shared by all services.

use std::sync::Arc;

use blog_core::traits::{BlogRepository, EntryRepository};
use blog_core::{Snowflake, SnowflakeGenerator};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    blog_repo: Arc<dyn BlogRepository>,
    entry_repo: Arc<dyn EntryRepository>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        blog_repo: Arc<dyn BlogRepository>,
        entry_repo: Arc<dyn EntryRepository>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            blog_repo,
            entry_repo,
            snowflake_generator,
        }
    }

    /// Get the blog repository
    pub fn blog_repo(&self) -> &dyn BlogRepository {
        self.blog_repo.as_ref()
    }

    /// Get the entry repository
    pub fn entry_repo(&self) -> &dyn EntryRepository {
        self.entry_repo.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    blog_repo: Option<Arc<dyn BlogRepository>>,
    entry_repo: Option<Arc<dyn EntryRepository>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            blog_repo: None,
            entry_repo: None,
            snowflake_generator: None,
        }
    }

    pub fn blog_repo(mut self, repo: Arc<dyn BlogRepository>) -> Self {
        self.blog_repo = Some(repo);
        self
    }

    pub fn entry_repo(mut self, repo: Arc<dyn EntryRepository>) -> Self {
        self.entry_repo = Some(repo);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.blog_repo
                .ok_or_else(|| super::error::ServiceError::validation("blog_repo is required"))?,
            self.entry_repo
                .ok_or_else(|| super::error::ServiceError::validation("entry_repo is required"))?,
            self.snowflake_generator.ok_or_else(|| {
                super::error::ServiceError::validation("snowflake_generator is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
