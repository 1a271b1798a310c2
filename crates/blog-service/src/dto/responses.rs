//! Response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use blog_core::entities::{Polarity, Reaction};
use blog_core::value_objects::Snowflake;

/// Blog representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub id: Snowflake,
    pub name: String,
    pub handle: String,
    pub polarity: Polarity,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub id: Snowflake,
    pub blog_id: Snowflake,
    pub reaction: Reaction,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Pagination metadata attached to list responses
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Paginated list response
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Liveness probe response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency checks
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: &'static str,
}

impl ReadinessResponse {
    pub fn new(database_ok: bool) -> Self {
        if database_ok {
            Self {
                status: "ready",
                database: "up",
            }
        } else {
            Self {
                status: "not_ready",
                database: "down",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_response_serializes_id_as_string() {
        let response = EntryResponse {
            id: Snowflake::new(42),
            blog_id: Snowflake::new(7),
            reaction: Reaction::Like,
            title: "t".to_string(),
            content: "c".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], "42");
        assert_eq!(json["blog_id"], "7");
        assert_eq!(json["reaction"], "LIKE");
    }

    #[test]
    fn test_readiness_response_reflects_database_state() {
        let ready = ReadinessResponse::new(true);
        assert_eq!(ready.status, "ready");

        let not_ready = ReadinessResponse::new(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.database, "down");
    }
}
