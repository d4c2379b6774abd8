//! Risk level decision procedure.

use crate::domain::foundation::{RiskLevel, SentimentScore};
use crate::domain::lexicon::CategoryMatches;

use super::settings::ScoringSettings;

/// Deterministic LOW/MEDIUM/HIGH classification.
///
/// Stateless decision table; each call is independent.
pub struct RiskClassifier;

impl RiskClassifier {
    /// Classifies one message from its matches, score, and override flag.
    ///
    /// Rules, first match wins:
    /// 1. concerning override or crisis/self-harm match - HIGH
    /// 2. depression/anxiety match - MEDIUM
    /// 3. otherwise - LOW
    /// then the score corrections of [`Self::apply_corrections`].
    pub fn classify(
        matches: &CategoryMatches,
        score: SentimentScore,
        concerning_override: bool,
        settings: &ScoringSettings,
    ) -> RiskLevel {
        if concerning_override || matches.has_high_risk() {
            return RiskLevel::High;
        }

        let tentative = if matches.has_elevated_risk() {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        Self::apply_corrections(tentative, score, settings)
    }

    /// Applies the score-based escalation and de-escalation corrections.
    ///
    /// A MEDIUM with strongly positive sentiment drops to LOW; a LOW with
    /// strongly negative sentiment rises to MEDIUM (very negative sentiment
    /// alone is a signal, even absent lexicon matches). HIGH is never
    /// downgraded. Conversation aggregation reuses this on averaged scores.
    pub fn apply_corrections(
        tentative: RiskLevel,
        score: SentimentScore,
        settings: &ScoringSettings,
    ) -> RiskLevel {
        match tentative {
            RiskLevel::Medium if score.value() > settings.medium_deescalation_above => {
                RiskLevel::Low
            }
            RiskLevel::Low if score.value() < settings.low_escalation_below => RiskLevel::Medium,
            other => other,
        }
    }
}
