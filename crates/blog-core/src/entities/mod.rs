//! Domain entities

mod blog;
mod entry;
mod reaction;

pub use blog::{Blog, Polarity};
pub use entry::Entry;
pub use reaction::{Reaction, UnknownReaction};
