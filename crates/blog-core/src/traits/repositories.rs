//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Blog, Entry};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Page request for list queries (1-based page index)
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: i64 = 20;
    pub const MAX_PER_PAGE: i64 = 100;

    /// Create a page request, clamping both values into valid range
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// Row offset for SQL queries
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// One page of results with the total row count
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

impl<T> Page<T> {
    /// Build a page from a query result and the request that produced it
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            per_page: request.per_page,
        }
    }

    /// Number of pages needed to hold `total` items
    pub fn total_pages(&self) -> i64 {
        if self.total == 0 {
            0
        } else {
            (self.total + self.per_page - 1) / self.per_page
        }
    }

    /// Map the items into another type, keeping the paging metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

// ============================================================================
// Blog Repository
// ============================================================================

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Find blog by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>>;

    /// List blogs with paging
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Blog>>;

    /// Create a new blog
    async fn create(&self, blog: &Blog) -> RepoResult<()>;

    /// Update an existing blog (full replace)
    async fn update(&self, blog: &Blog) -> RepoResult<()>;

    /// Delete a blog
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Entry Repository
// ============================================================================

#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Find entry by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Entry>>;

    /// List entries with paging
    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Entry>>;

    /// List entries of a blog with paging
    async fn find_by_blog(&self, blog_id: Snowflake, request: PageRequest)
        -> RepoResult<Page<Entry>>;

    /// Create a new entry
    async fn create(&self, entry: &Entry) -> RepoResult<()>;

    /// Update an existing entry (full replace)
    async fn update(&self, entry: &Entry) -> RepoResult<()>;

    /// Delete an entry
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}
