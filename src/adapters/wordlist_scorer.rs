//! Wordlist valence scorer - default in-process implementation of the
//! `ValenceScorer` port.
//!
//! AFINN-style signed word weights summed over simple tokens, clamped to
//! the native [-5, +5] range. Hosts wanting a richer model inject their
//! own implementation behind the same port.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::ports::{ValenceError, ValenceScorer};

static WORD_WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        // Positive polarity
        ("happy", 3.0),
        ("glad", 3.0),
        ("great", 3.0),
        ("good", 3.0),
        ("love", 3.0),
        ("loved", 3.0),
        ("grateful", 3.0),
        ("thankful", 2.0),
        ("wonderful", 4.0),
        ("amazing", 4.0),
        ("awesome", 4.0),
        ("excellent", 3.0),
        ("excited", 3.0),
        ("joy", 3.0),
        ("fun", 4.0),
        ("nice", 3.0),
        ("hope", 2.0),
        ("hopeful", 2.0),
        ("calm", 2.0),
        ("peaceful", 2.0),
        ("proud", 2.0),
        ("better", 2.0),
        ("thanks", 2.0),
        ("smile", 2.0),
        ("perfect", 3.0),
        // Negative polarity
        ("sad", -2.0),
        ("unhappy", -2.0),
        ("depressed", -2.0),
        ("miserable", -3.0),
        ("hopeless", -2.0),
        ("worthless", -3.0),
        ("lonely", -2.0),
        ("alone", -1.0),
        ("exhausted", -2.0),
        ("tired", -1.0),
        ("anxious", -2.0),
        ("worried", -3.0),
        ("afraid", -2.0),
        ("scared", -2.0),
        ("fear", -2.0),
        ("panic", -3.0),
        ("nervous", -2.0),
        ("stress", -2.0),
        ("stressed", -2.0),
        ("overwhelmed", -2.0),
        ("pain", -2.0),
        ("hurt", -2.0),
        ("crying", -2.0),
        ("cry", -1.0),
        ("angry", -3.0),
        ("hate", -3.0),
        ("terrible", -3.0),
        ("awful", -3.0),
        ("horrible", -3.0),
        ("bad", -3.0),
        ("worse", -3.0),
        ("worst", -3.0),
        ("die", -3.0),
        ("death", -2.0),
        ("suicide", -2.0),
        ("desperate", -3.0),
        ("helpless", -2.0),
        ("useless", -2.0),
        ("failure", -2.0),
        ("broken", -1.0),
        ("numb", -1.0),
    ]
    .into_iter()
    .collect()
});

/// Lexicon-backed word-polarity scorer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordlistValenceScorer;

impl WordlistValenceScorer {
    /// Creates a new scorer.
    pub fn new() -> Self {
        Self
    }
}

impl ValenceScorer for WordlistValenceScorer {
    fn raw_score(&self, text: &str) -> Result<f64, ValenceError> {
        let lowered = text.to_lowercase();
        let sum: f64 = lowered
            .split(|c: char| !c.is_alphanumeric() && c != '\'')
            .filter(|token| !token.is_empty())
            .filter_map(|token| WORD_WEIGHTS.get(token))
            .sum();

        Ok(sum.clamp(-5.0, 5.0))
    }
}
