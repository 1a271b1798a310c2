//! Reaction vocabulary - the closed set of emotional tags an entry can carry
//!
//! Every tag is statically classified as positive- or negative-compatible.
//! The classification lives in an exhaustive `match`, so adding a variant
//! without classifying it is a compile error rather than a runtime default.

use serde::{Deserialize, Serialize};

use crate::entities::blog::Polarity;

/// Fixed reaction tag attached to an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Reaction {
    Like,
    Haha,
    Sad,
    Angry,
}

impl Reaction {
    /// The polarity this reaction is compatible with
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Like | Self::Haha => Polarity::Positive,
            Self::Sad | Self::Angry => Polarity::Negative,
        }
    }

    /// Whether this reaction agrees with the given blog polarity
    #[inline]
    pub fn is_compatible_with(self, polarity: Polarity) -> bool {
        self.polarity() == polarity
    }

    /// Canonical wire form (matches the serde representation)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Haha => "HAHA",
            Self::Sad => "SAD",
            Self::Angry => "ANGRY",
        }
    }
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Reaction {
    type Err = UnknownReaction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKE" => Ok(Self::Like),
            "HAHA" => Ok(Self::Haha),
            "SAD" => Ok(Self::Sad),
            "ANGRY" => Ok(Self::Angry),
            _ => Err(UnknownReaction(s.to_string())),
        }
    }
}

/// Error when parsing a reaction tag outside the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reaction tag: {0}")]
pub struct UnknownReaction(pub String);
