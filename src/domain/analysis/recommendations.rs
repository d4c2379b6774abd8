//! Curated guidance copy per risk level.

use crate::domain::foundation::RiskLevel;

const LOW_RECOMMENDATIONS: &[&str] = &[
    "Consider talking to a trusted friend or family member about your feelings.",
    "Try some relaxation techniques like deep breathing or meditation.",
    "Take a walk or engage in physical activity to improve your mood.",
];

const MEDIUM_RECOMMENDATIONS: &[&str] = &[
    "Consider scheduling an appointment with a mental health professional.",
    "Call or text a mental health helpline for support.",
    "Practice self-care activities and maintain a regular sleep schedule.",
];

const HIGH_RECOMMENDATIONS: &[&str] = &[
    "If you're having thoughts of self-harm, please call emergency services (911) immediately.",
    "Contact the National Suicide Prevention Lifeline at 988.",
    "Reach out to a mental health professional as soon as possible.",
];

/// Single generic line returned for conversations too short to analyze.
const NEUTRAL_RECOMMENDATION: &str =
    "Keep the conversation going to get a meaningful wellbeing picture.";

/// Maps a risk level to its fixed, ordered guidance list.
///
/// Content is domain copy, not algorithmic.
pub struct RecommendationProvider;

impl RecommendationProvider {
    /// Returns the guidance strings for a risk level, in display order.
    pub fn for_level(level: RiskLevel) -> Vec<String> {
        let lines = match level {
            RiskLevel::Low => LOW_RECOMMENDATIONS,
            RiskLevel::Medium => MEDIUM_RECOMMENDATIONS,
            RiskLevel::High => HIGH_RECOMMENDATIONS,
        };
        lines.iter().map(|line| (*line).to_string()).collect()
    }

    /// Returns the single-line default for statistically meaningless input.
    pub fn neutral_default() -> Vec<String> {
        vec![NEUTRAL_RECOMMENDATION.to_string()]
    }
}
