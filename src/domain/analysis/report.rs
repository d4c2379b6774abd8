//! Analysis result records.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EmotionalState, RiskLevel, SentimentScore};

use super::settings::ScoreScale;

/// Common surface of message- and conversation-level analyses, used by
/// policies that consume either shape.
pub trait RiskAssessment {
    /// The classified risk level.
    fn risk_level(&self) -> RiskLevel;

    /// The normalized sentiment score.
    fn sentiment_score(&self) -> SentimentScore;
}

/// Result of analyzing a single message.
///
/// Immutable once produced; cached by exact text match; never persisted
/// by this crate (persistence belongs to the hosting application).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAnalysis {
    /// Normalized score, always within [0, 100].
    pub sentiment_score: SentimentScore,
    /// Tone derived solely from the score.
    pub emotional_state: EmotionalState,
    /// Three-tier severity classification.
    pub risk_level: RiskLevel,
    /// Matched lexicon terms, deduplicated.
    pub keywords: Vec<String>,
    /// Guidance strings, fully determined by the risk level.
    pub recommendations: Vec<String>,
}

impl MessageAnalysis {
    /// Returns the score on the host-configured scale.
    ///
    /// Percentage mode reads the canonical 0-100 value; raw mode maps it
    /// back onto the native [-5, +5] valence range.
    pub fn scaled_score(&self, scale: ScoreScale) -> f64 {
        match scale {
            ScoreScale::Percentage => f64::from(self.sentiment_score.value()),
            ScoreScale::Raw => self.sentiment_score.as_raw_valence(),
        }
    }
}

impl RiskAssessment for MessageAnalysis {
    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    fn sentiment_score(&self) -> SentimentScore {
        self.sentiment_score
    }
}

/// Aggregated result over a conversation's message history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationAnalysis {
    /// Integer average of per-message scores.
    pub sentiment_score: SentimentScore,
    /// Tone derived from the averaged score.
    pub emotional_state: EmotionalState,
    /// Dominant risk level with recency weighting.
    pub risk_level: RiskLevel,
    /// Union of per-message keyword sets, deduplicated.
    pub keywords: Vec<String>,
    /// Guidance strings for the aggregate risk level.
    pub recommendations: Vec<String>,
    /// Messages supplied in the history.
    pub message_count: usize,
    /// Messages that carried a body and were analyzed.
    pub analyzed_count: usize,
}

impl ConversationAnalysis {
    /// Returns the averaged score on the host-configured scale.
    pub fn scaled_score(&self, scale: ScoreScale) -> f64 {
        match scale {
            ScoreScale::Percentage => f64::from(self.sentiment_score.value()),
            ScoreScale::Raw => self.sentiment_score.as_raw_valence(),
        }
    }
}

impl RiskAssessment for ConversationAnalysis {
    fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    fn sentiment_score(&self) -> SentimentScore {
        self.sentiment_score
    }
}
