//! Request DTOs with validation

use serde::Deserialize;
use validator::Validate;

use blog_core::entities::{Polarity, Reaction};
use blog_core::value_objects::Snowflake;

/// Request body for creating or replacing an entry
///
/// The same shape is used for both operations: create rejects a body that
/// carries an `id`, update requires one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EntryRequest {
    /// Entry ID, must be absent on create and present on update
    #[serde(default)]
    pub id: Option<Snowflake>,

    /// Parent blog ID
    pub blog_id: Snowflake,

    /// Reaction tag attached to the entry
    pub reaction: Reaction,

    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be between 1 and 10000 characters"))]
    pub content: String,
}

/// Request body for creating a blog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Handle must be between 1 and 50 characters"))]
    pub handle: String,

    /// Declared mood of the blog
    pub polarity: Polarity,
}

/// Request body for replacing a blog
///
/// Full-replace semantics, every field must be supplied.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Handle must be between 1 and 50 characters"))]
    pub handle: String,

    pub polarity: Polarity,
}
