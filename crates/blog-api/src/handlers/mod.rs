//! HTTP request handlers

pub mod blogs;
pub mod entries;
pub mod health;
