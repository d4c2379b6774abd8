//! Emotional state derived from the sentiment score.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SentimentScore;

/// Coarse emotional tone of a message, derived solely from its score.
///
/// Cutoffs are symmetric around the neutral midpoint by default (below 40
/// is negative, above 60 positive) and configurable by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmotionalState {
    Positive,
    Neutral,
    Negative,
}

impl EmotionalState {
    /// Derives the state from a score and the configured cutoffs.
    pub fn from_score(score: SentimentScore, negative_below: u8, positive_above: u8) -> Self {
        if score.value() < negative_below {
            EmotionalState::Negative
        } else if score.value() > positive_above {
            EmotionalState::Positive
        } else {
            EmotionalState::Neutral
        }
    }
}

impl fmt::Display for EmotionalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EmotionalState::Positive => "POSITIVE",
            EmotionalState::Neutral => "NEUTRAL",
            EmotionalState::Negative => "NEGATIVE",
        };
        write!(f, "{}", s)
    }
}
