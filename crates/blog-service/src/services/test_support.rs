//! In-memory repository implementations for service tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use blog_core::entities::{Blog, Entry};
use blog_core::error::DomainError;
use blog_core::traits::{BlogRepository, EntryRepository, Page, PageRequest, RepoResult};
use blog_core::value_objects::{Snowflake, SnowflakeGenerator};

use super::context::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: Mutex<HashMap<i64, Blog>>,
}

impl InMemoryBlogRepository {
    pub fn with_blogs(blogs: Vec<Blog>) -> Self {
        let map = blogs.into_iter().map(|b| (b.id.into_inner(), b)).collect();
        Self {
            blogs: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.blogs.lock().len()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Blog>> {
        Ok(self.blogs.lock().get(&id.into_inner()).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Blog>> {
        let guard = self.blogs.lock();
        let mut items: Vec<Blog> = guard.values().cloned().collect();
        items.sort_by_key(|b| b.id.into_inner());
        let total = items.len() as i64;
        let items = items
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.per_page as usize)
            .collect();
        Ok(Page::new(items, total, request))
    }

    async fn create(&self, blog: &Blog) -> RepoResult<()> {
        self.blogs.lock().insert(blog.id.into_inner(), blog.clone());
        Ok(())
    }

    async fn update(&self, blog: &Blog) -> RepoResult<()> {
        let mut guard = self.blogs.lock();
        if !guard.contains_key(&blog.id.into_inner()) {
            return Err(DomainError::BlogNotFound(blog.id));
        }
        guard.insert(blog.id.into_inner(), blog.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        if self.blogs.lock().remove(&id.into_inner()).is_none() {
            return Err(DomainError::BlogNotFound(id));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryEntryRepository {
    entries: Mutex<HashMap<i64, Entry>>,
}

impl InMemoryEntryRepository {
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let map = entries
            .into_iter()
            .map(|e| (e.id.into_inner(), e))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn get(&self, id: Snowflake) -> Option<Entry> {
        self.entries.lock().get(&id.into_inner()).cloned()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Entry>> {
        Ok(self.entries.lock().get(&id.into_inner()).cloned())
    }

    async fn find_page(&self, request: PageRequest) -> RepoResult<Page<Entry>> {
        let guard = self.entries.lock();
        let mut items: Vec<Entry> = guard.values().cloned().collect();
        items.sort_by_key(|e| e.id.into_inner());
        let total = items.len() as i64;
        let items = items
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.per_page as usize)
            .collect();
        Ok(Page::new(items, total, request))
    }

    async fn find_by_blog(&self, blog_id: Snowflake, request: PageRequest) -> RepoResult<Page<Entry>> {
        let guard = self.entries.lock();
        let mut items: Vec<Entry> = guard
            .values()
            .filter(|e| e.blog_id == blog_id)
            .cloned()
            .collect();
        items.sort_by_key(|e| e.id.into_inner());
        let total = items.len() as i64;
        let items = items
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.per_page as usize)
            .collect();
        Ok(Page::new(items, total, request))
    }

    async fn create(&self, entry: &Entry) -> RepoResult<()> {
        self.entries
            .lock()
            .insert(entry.id.into_inner(), entry.clone());
        Ok(())
    }

    async fn update(&self, entry: &Entry) -> RepoResult<()> {
        let mut guard = self.entries.lock();
        if !guard.contains_key(&entry.id.into_inner()) {
            return Err(DomainError::EntryNotFound(entry.id));
        }
        guard.insert(entry.id.into_inner(), entry.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        if self.entries.lock().remove(&id.into_inner()).is_none() {
            return Err(DomainError::EntryNotFound(id));
        }
        Ok(())
    }
}

/// Build a context wired to the given in-memory repositories.
pub fn context_with(
    blog_repo: Arc<InMemoryBlogRepository>,
    entry_repo: Arc<InMemoryEntryRepository>,
) -> ServiceContext {
    ServiceContextBuilder::new()
        .blog_repo(blog_repo)
        .entry_repo(entry_repo)
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap()
}
