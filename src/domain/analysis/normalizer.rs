//! Score normalization - raw valence to a 0-100 percentage.

use crate::domain::foundation::SentimentScore;
use crate::domain::lexicon::{CategoryMatches, LexiconCategory, ScoreEffect};

use super::settings::ScoringSettings;

/// The most negative valence the native scale is expected to produce.
/// A concerning-phrase override forces the raw input here so HIGH-risk
/// text is never masked by incidental positive wording.
const MOST_NEGATIVE_VALENCE: f64 = -5.0;

/// Converts raw valence plus category matches into a bounded score.
pub struct ScoreNormalizer;

impl ScoreNormalizer {
    /// Normalizes `raw_valence` onto [0, 100] and applies category effects.
    ///
    /// Order matters: the concerning override replaces the raw input first,
    /// the linear map clamps and rounds, category penalties and the positive
    /// bonus stack additively, the crisis/self-harm cap dominates them, and
    /// a final clamp guarantees the bound invariant.
    pub fn normalize(
        raw_valence: f64,
        matches: &CategoryMatches,
        concerning_override: bool,
        settings: &ScoringSettings,
    ) -> SentimentScore {
        let raw = if concerning_override {
            MOST_NEGATIVE_VALENCE
        } else {
            raw_valence
        };

        let percentage = ((raw + 5.0) / 10.0 * 100.0).clamp(0.0, 100.0).round() as i32;
        let mut score = percentage;

        for category in LexiconCategory::ALL {
            let count = matches.count(category) as i32;
            if count == 0 {
                continue;
            }
            match category.score_effect() {
                // A penalty never increases the score even if configured
                // with a non-positive magnitude.
                ScoreEffect::Penalty(magnitude) => {
                    score = score.min(score - magnitude * count);
                }
                ScoreEffect::Bonus(magnitude) => {
                    score = (score + magnitude * count).min(100);
                }
                ScoreEffect::Cap => {}
            }
        }

        if matches.has_high_risk() {
            score = score.min(i32::from(settings.crisis_score_cap));
        }

        SentimentScore::from_adjusted(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lexicon::KeywordClassifier;

    fn settings() -> ScoringSettings {
        ScoringSettings::default()
    }

    #[test]
    fn zero_valence_with_no_matches_is_50() {
        let matches = KeywordClassifier::classify("the weather is mild");
        let score = ScoreNormalizer::normalize(0.0, &matches, false, &settings());
        assert_eq!(score.value(), 50);
    }

    #[test]
    fn linear_map_covers_the_native_range() {
        let matches = CategoryMatches::default();
        assert_eq!(
            ScoreNormalizer::normalize(-5.0, &matches, false, &settings()).value(),
            0
        );
        assert_eq!(
            ScoreNormalizer::normalize(5.0, &matches, false, &settings()).value(),
            100
        );
        assert_eq!(
            ScoreNormalizer::normalize(2.5, &matches, false, &settings()).value(),
            75
        );
    }

    #[test]
    fn out_of_range_valence_is_clamped_before_rounding() {
        let matches = CategoryMatches::default();
        assert_eq!(
            ScoreNormalizer::normalize(12.0, &matches, false, &settings()).value(),
            100
        );
        assert_eq!(
            ScoreNormalizer::normalize(-40.0, &matches, false, &settings()).value(),
            0
        );
    }

    #[test]
    fn depression_matches_subtract_five_each() {
        // "hopeless" and "worthless" -> two depression matches.
        let matches = KeywordClassifier::classify("hopeless and worthless");
        let score = ScoreNormalizer::normalize(0.0, &matches, false, &settings());
        assert_eq!(score.value(), 40);
    }

    #[test]
    fn positive_matches_add_three_each_capped_at_100() {
        let matches = KeywordClassifier::classify("happy and grateful");
        let score = ScoreNormalizer::normalize(4.8, &matches, false, &settings());
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn crisis_match_caps_the_score() {
        let matches = KeywordClassifier::classify("this is an emergency but I feel happy");
        let score = ScoreNormalizer::normalize(3.0, &matches, false, &settings());
        assert!(score.value() <= 20);
    }

    #[test]
    fn concerning_override_forces_the_floor() {
        let matches = KeywordClassifier::classify("I want to die but today was happy");
        let score = ScoreNormalizer::normalize(4.0, &matches, true, &settings());
        // Raw forced to -5.0 maps to 0; the positive bonus cannot lift it
        // past the self-harm cap.
        assert!(score.value() <= 20);
    }

    #[test]
    fn stacked_penalties_clamp_at_zero() {
        let matches =
            KeywordClassifier::classify("sad hopeless worthless empty miserable, no point");
        let score = ScoreNormalizer::normalize(-5.0, &matches, false, &settings());
        assert_eq!(score.value(), 0);
    }
}
