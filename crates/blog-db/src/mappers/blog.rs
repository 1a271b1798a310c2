//! Blog entity <-> model mapper

use blog_core::entities::{Blog, Polarity};
use blog_core::value_objects::Snowflake;

use crate::models::BlogModel;

/// Decode the `positive` column into a Polarity
pub fn polarity_from_bool(positive: bool) -> Polarity {
    if positive {
        Polarity::Positive
    } else {
        Polarity::Negative
    }
}

/// Encode a Polarity for the `positive` column
pub fn polarity_to_bool(polarity: Polarity) -> bool {
    polarity.is_positive()
}

/// Convert BlogModel to Blog entity
impl From<BlogModel> for Blog {
    fn from(model: BlogModel) -> Self {
        Blog {
            id: Snowflake::new(model.id),
            name: model.name,
            handle: model.handle,
            polarity: polarity_from_bool(model.positive),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
