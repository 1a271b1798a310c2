//! # blog-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! mood-consistency validator. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Blog, Entry, Polarity, Reaction};
pub use error::DomainError;
pub use traits::{BlogRepository, EntryRepository, Page, PageRequest, RepoResult};
pub use validation::{validate_entry, NEGATIVE_MARKERS, POSITIVE_MARKERS};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
