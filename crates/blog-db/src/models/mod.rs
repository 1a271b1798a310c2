//! Database models - SQLx-compatible structs for PostgreSQL tables

mod blog;
mod entry;

pub use blog::BlogModel;
pub use entry::EntryModel;
