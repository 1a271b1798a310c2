//! Entity to model mappers
//!
//! Conversions between domain entities (blog-core) and database models.
//! - `From<BlogModel>` / `entry_from_model`: convert rows to domain objects
//! - Helper functions for column encodings (polarity boolean, reaction tag)

mod blog;
mod entry;

pub use blog::{polarity_from_bool, polarity_to_bool};
pub use entry::entry_from_model;
