//! Lexicon categories and their scoring effects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named keyword category with a fixed term list and scoring effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconCategory {
    Depression,
    Anxiety,
    Stress,
    Crisis,
    SelfHarm,
    Positive,
}

/// How matches in a category adjust the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEffect {
    /// Subtract `magnitude` per matched term; never raises the score.
    Penalty(i32),
    /// Add `magnitude` per matched term, capped at 100.
    Bonus(i32),
    /// Cap the score at the configured ceiling regardless of other terms.
    Cap,
}

const DEPRESSION_TERMS: &[&str] = &[
    "sad",
    "depressed",
    "hopeless",
    "worthless",
    "empty",
    "miserable",
    "give up",
    "no point",
];

const ANXIETY_TERMS: &[&str] = &[
    "anxious",
    "worried",
    "panic",
    "fear",
    "scared",
    "nervous",
    "overwhelmed",
];

const STRESS_TERMS: &[&str] = &[
    "stress",
    "pressure",
    "can't handle",
    "too much",
    "exhausted",
    "burned out",
];

const CRISIS_TERMS: &[&str] = &["emergency", "crisis", "urgent", "desperate"];

const SELF_HARM_TERMS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "self-harm",
    "self harm",
];

const POSITIVE_TERMS: &[&str] = &[
    "happy",
    "grateful",
    "joy",
    "hopeful",
    "excited",
    "calm",
    "peaceful",
    "thankful",
    "proud",
    "loved",
];

impl LexiconCategory {
    /// All six categories, in scoring order.
    pub const ALL: [LexiconCategory; 6] = [
        LexiconCategory::Depression,
        LexiconCategory::Anxiety,
        LexiconCategory::Stress,
        LexiconCategory::Crisis,
        LexiconCategory::SelfHarm,
        LexiconCategory::Positive,
    ];

    /// Returns the fixed term list, in declaration order.
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            LexiconCategory::Depression => DEPRESSION_TERMS,
            LexiconCategory::Anxiety => ANXIETY_TERMS,
            LexiconCategory::Stress => STRESS_TERMS,
            LexiconCategory::Crisis => CRISIS_TERMS,
            LexiconCategory::SelfHarm => SELF_HARM_TERMS,
            LexiconCategory::Positive => POSITIVE_TERMS,
        }
    }

    /// Returns the category's effect on the normalized score.
    pub fn score_effect(&self) -> ScoreEffect {
        match self {
            LexiconCategory::Depression => ScoreEffect::Penalty(5),
            LexiconCategory::Anxiety => ScoreEffect::Penalty(3),
            LexiconCategory::Stress => ScoreEffect::Penalty(2),
            LexiconCategory::Crisis | LexiconCategory::SelfHarm => ScoreEffect::Cap,
            LexiconCategory::Positive => ScoreEffect::Bonus(3),
        }
    }

    /// Returns true if matches in this category force a HIGH risk level.
    pub fn is_high_risk(&self) -> bool {
        matches!(self, LexiconCategory::Crisis | LexiconCategory::SelfHarm)
    }

    /// Returns true if matches in this category raise risk to at least MEDIUM.
    pub fn is_elevated_risk(&self) -> bool {
        matches!(self, LexiconCategory::Depression | LexiconCategory::Anxiety)
    }
}

impl fmt::Display for LexiconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LexiconCategory::Depression => "depression",
            LexiconCategory::Anxiety => "anxiety",
            LexiconCategory::Stress => "stress",
            LexiconCategory::Crisis => "crisis",
            LexiconCategory::SelfHarm => "self_harm",
            LexiconCategory::Positive => "positive",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_terms() {
        for category in LexiconCategory::ALL {
            assert!(!category.terms().is_empty(), "{} has no terms", category);
        }
    }

    #[test]
    fn terms_are_lowercase() {
        // Matching lowercases the message only, so lexicon terms must
        // already be lowercase.
        for category in LexiconCategory::ALL {
            for term in category.terms() {
                assert_eq!(*term, term.to_lowercase(), "in {}", category);
            }
        }
    }

    #[test]
    fn crisis_and_self_harm_cap_the_score() {
        assert_eq!(LexiconCategory::Crisis.score_effect(), ScoreEffect::Cap);
        assert_eq!(LexiconCategory::SelfHarm.score_effect(), ScoreEffect::Cap);
    }

    #[test]
    fn risk_tiers_are_disjoint() {
        for category in LexiconCategory::ALL {
            assert!(!(category.is_high_risk() && category.is_elevated_risk()));
        }
    }
}
