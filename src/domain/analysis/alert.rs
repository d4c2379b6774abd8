//! Alert decision over a completed analysis.

use crate::domain::foundation::RiskLevel;

use super::report::RiskAssessment;
use super::settings::ScoringSettings;

/// Decides whether an analysis should trigger the host's notification path.
pub struct AlertPolicy;

impl AlertPolicy {
    /// Returns true if the result warrants an external notification.
    ///
    /// HIGH always alerts; a borderline MEDIUM alerts when its score falls
    /// below the configured cutoff. Works over both message- and
    /// conversation-level analyses.
    pub fn should_alert(analysis: &impl RiskAssessment, settings: &ScoringSettings) -> bool {
        match analysis.risk_level() {
            RiskLevel::High => true,
            RiskLevel::Medium => {
                analysis.sentiment_score().value() < settings.medium_alert_below
            }
            RiskLevel::Low => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SentimentScore;

    struct Stub {
        risk: RiskLevel,
        score: SentimentScore,
    }

    impl RiskAssessment for Stub {
        fn risk_level(&self) -> RiskLevel {
            self.risk
        }
        fn sentiment_score(&self) -> SentimentScore {
            self.score
        }
    }

    fn stub(risk: RiskLevel, score: u8) -> Stub {
        Stub {
            risk,
            score: SentimentScore::new(score),
        }
    }

    #[test]
    fn high_always_alerts() {
        let settings = ScoringSettings::default();
        assert!(AlertPolicy::should_alert(&stub(RiskLevel::High, 90), &settings));
    }

    #[test]
    fn borderline_medium_alerts() {
        let settings = ScoringSettings::default();
        assert!(AlertPolicy::should_alert(&stub(RiskLevel::Medium, 10), &settings));
        assert!(!AlertPolicy::should_alert(&stub(RiskLevel::Medium, 20), &settings));
        assert!(!AlertPolicy::should_alert(&stub(RiskLevel::Medium, 45), &settings));
    }

    #[test]
    fn low_never_alerts() {
        let settings = ScoringSettings::default();
        assert!(!AlertPolicy::should_alert(&stub(RiskLevel::Low, 0), &settings));
    }
}
