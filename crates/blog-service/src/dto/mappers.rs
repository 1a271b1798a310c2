//! Entity to DTO mappers

use blog_core::entities::{Blog, Entry};
use blog_core::traits::Page;

use super::responses::{BlogResponse, EntryResponse, PageMeta, PageResponse};

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id,
            name: blog.name.clone(),
            handle: blog.handle.clone(),
            polarity: blog.polarity,
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        }
    }
}

impl From<&Entry> for EntryResponse {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            blog_id: entry.blog_id,
            reaction: entry.reaction,
            title: entry.title.clone(),
            content: entry.content.clone(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

impl<T> PageResponse<T> {
    /// Build a page response from a domain page, converting each item.
    pub fn from_page<U>(page: Page<U>) -> Self
    where
        for<'a> T: From<&'a U>,
    {
        let pagination = PageMeta {
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages: page.total_pages(),
        };
        Self {
            data: page.items.iter().map(T::from).collect(),
            pagination,
        }
    }
}
