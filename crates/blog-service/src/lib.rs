//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    BlogResponse, CreateBlogRequest, EntryRequest, EntryResponse, HealthResponse, PageMeta,
    PageResponse, ReadinessResponse, UpdateBlogRequest,
};
pub use services::{
    BlogService, EntryService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
