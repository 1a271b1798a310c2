//! Repository traits (ports)

mod repositories;

pub use repositories::{BlogRepository, EntryRepository, Page, PageRequest, RepoResult};
