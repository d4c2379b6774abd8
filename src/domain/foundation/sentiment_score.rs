//! Sentiment score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A normalized sentiment score between 0 and 100 inclusive.
///
/// 0 is maximally negative, 100 maximally positive, 50 neutral. The
/// percentage scale is the canonical scale of the engine; the native
/// valence scale can be recovered with [`SentimentScore::as_raw_valence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentScore(u8);

impl SentimentScore {
    /// The neutral midpoint (50).
    pub const NEUTRAL: Self = Self(50);

    /// Creates a new score, clamping to the valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a score from a signed intermediate value, clamping to [0, 100].
    ///
    /// The normalizer works in signed arithmetic so stacked penalties can
    /// drive the intermediate value below zero before the final clamp.
    pub fn from_adjusted(value: i32) -> Self {
        Self(value.clamp(0, 100) as u8)
    }

    /// Creates a score, returning an error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "sentiment_score",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Maps the score back onto the native valence scale [-5.0, +5.0].
    ///
    /// Inverse of the linear map used during normalization. Hosts that
    /// configure the raw score scale read this instead of [`Self::value`].
    pub fn as_raw_valence(&self) -> f64 {
        f64::from(self.0) / 10.0 - 5.0
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
