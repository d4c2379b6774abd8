//! Concerning phrase detection.
//!
//! A short list of explicit self-harm phrasings short-circuits normal
//! scoring: any hit forces the most negative valence and a HIGH risk
//! level, so incidental positive wording elsewhere in the message can
//! never mask it.

/// Explicit high-severity phrasings checked before normal scoring.
const CONCERNING_PHRASES: &[&str] = &[
    "kill myself",
    "end my life",
    "want to die",
    "suicide",
    "no reason to live",
    "better off without me",
    "end it all",
];

/// Detector for explicit self-harm phrasing.
pub struct ConcerningPhraseDetector;

impl ConcerningPhraseDetector {
    /// Returns true if `text` contains any concerning phrase.
    ///
    /// Case-insensitive substring search; pure, no failure modes.
    pub fn detect(text: &str) -> bool {
        Self::first_match(text).is_some()
    }

    /// Returns the first concerning phrase contained in `text`, if any.
    ///
    /// Used by the analyzer to log which phrase triggered the override.
    pub fn first_match(text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        CONCERNING_PHRASES
            .iter()
            .find(|phrase| lowered.contains(*phrase))
            .copied()
    }
}
