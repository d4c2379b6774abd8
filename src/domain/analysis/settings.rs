//! Tunable thresholds for scoring, aggregation, and caching.
//!
//! Defaults are the engine's canonical values; hosts override them through
//! the environment-backed configuration in `crate::config`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Which scale hosts read analysis scores on.
///
/// The percentage scale is canonical and all thresholds are expressed on
/// it; `Raw` only changes the reading consumers take from a report (see
/// `MessageAnalysis::scaled_score`), mapping linearly back onto the
/// native [-5, +5] valence range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreScale {
    #[default]
    Percentage,
    Raw,
}

/// Thresholds governing normalization, risk corrections, and alerting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringSettings {
    /// Ceiling applied to the score when crisis or self-harm terms match.
    pub crisis_score_cap: u8,
    /// Scores strictly below this are NEGATIVE.
    pub negative_below: u8,
    /// Scores strictly above this are POSITIVE.
    pub positive_above: u8,
    /// A tentative MEDIUM with a score strictly above this drops to LOW.
    pub medium_deescalation_above: u8,
    /// A tentative LOW with a score strictly below this rises to MEDIUM.
    pub low_escalation_below: u8,
    /// A MEDIUM result with a score strictly below this triggers an alert.
    pub medium_alert_below: u8,
    /// Scale on which hosts consume scores.
    pub scale: ScoreScale,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            crisis_score_cap: 20,
            negative_below: 40,
            positive_above: 60,
            medium_deescalation_above: 60,
            low_escalation_below: 20,
            medium_alert_below: 20,
            scale: ScoreScale::Percentage,
        }
    }
}

impl ScoringSettings {
    /// Validates threshold consistency.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("crisis_score_cap", self.crisis_score_cap),
            ("negative_below", self.negative_below),
            ("positive_above", self.positive_above),
            ("medium_deescalation_above", self.medium_deescalation_above),
            ("low_escalation_below", self.low_escalation_below),
            ("medium_alert_below", self.medium_alert_below),
        ] {
            if value > 100 {
                return Err(ValidationError::out_of_range(field, 0, 100, i64::from(value)));
            }
        }
        if self.negative_below > self.positive_above {
            return Err(ValidationError::invalid(
                "negative_below",
                "negative cutoff exceeds positive cutoff",
            ));
        }
        Ok(())
    }
}

/// Settings for conversation-level aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationSettings {
    /// Histories shorter than this get the fixed neutral default.
    pub min_messages: usize,
    /// Trailing window given extra weight when deriving conversation risk.
    pub recent_window: usize,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            min_messages: 3,
            recent_window: 5,
        }
    }
}

impl AggregationSettings {
    /// Validates aggregation settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recent_window == 0 {
            return Err(ValidationError::invalid(
                "recent_window",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Settings for the bounded result cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Maximum number of cached analyses.
    pub capacity: usize,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

impl CacheSettings {
    /// Validates cache settings. A zero capacity fails here, at
    /// construction time, not at first use.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.capacity == 0 {
            return Err(ValidationError::invalid("capacity", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ScoringSettings::default().validate().is_ok());
        assert!(AggregationSettings::default().validate().is_ok());
        assert!(CacheSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_threshold_over_100() {
        let settings = ScoringSettings {
            crisis_score_cap: 120,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_inverted_cutoffs() {
        let settings = ScoringSettings {
            negative_below: 70,
            positive_above: 30,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_zero_capacity() {
        let settings = CacheSettings { capacity: 0 };
        assert!(settings.validate().is_err());
    }
}
