//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.

mod blog;
mod entry;
mod error;

pub use blog::PgBlogRepository;
pub use entry::PgEntryRepository;
