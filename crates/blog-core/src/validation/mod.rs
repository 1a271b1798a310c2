//! Mood-consistency validation
//!
//! The one piece of non-trivial business logic in the system: entries must
//! agree with their parent blog's declared polarity, both in reaction tag and
//! in text.

mod markers;
mod mood;

pub use markers::{
    contains_marker, disqualifying_markers, markers_signaling, NEGATIVE_MARKERS, POSITIVE_MARKERS,
};
pub use mood::validate_entry;
