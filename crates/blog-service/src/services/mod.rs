//! Application services
//!
//! Services orchestrate domain logic over the repository ports. The
//! [`ServiceContext`] carries the shared dependencies and hands out
//! service instances.

pub mod blog;
pub mod context;
pub mod entry;
pub mod error;

#[cfg(test)]
pub(crate) mod test_support;

pub use blog::BlogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use entry::EntryService;
pub use error::{ServiceError, ServiceResult};
