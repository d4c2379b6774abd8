//! Valence scoring port.
//!
//! The engine treats raw valence scoring as an injected collaborator: a
//! pure function from text to a single signed polarity estimate. The
//! bundled wordlist adapter covers the common case; hosts may inject a
//! different implementation behind the same trait.

use thiserror::Error;

/// Port for turning a text string into a raw valence estimate.
///
/// Implementations must be thread-safe and side-effect free. The expected
/// native range is roughly [-5.0, +5.0]; the normalizer clamps anything
/// outside it. All calls are synchronous CPU-bound computations - no I/O,
/// no suspension points.
pub trait ValenceScorer: Send + Sync {
    /// Scores the raw valence of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ValenceError`] if the scorer cannot produce a score. The
    /// engine propagates this failure instead of substituting a neutral
    /// default.
    fn raw_score(&self, text: &str) -> Result<f64, ValenceError>;
}

/// Errors a valence scorer implementation may surface.
#[derive(Debug, Clone, Error)]
pub enum ValenceError {
    #[error("Scorer unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Scoring failed: {reason}")]
    ScoringFailed { reason: String },
}

impl ValenceError {
    /// Creates an unavailable-dependency error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ValenceError::Unavailable {
            reason: reason.into(),
        }
    }

    /// Creates a scoring failure error.
    pub fn scoring_failed(reason: impl Into<String>) -> Self {
        ValenceError::ScoringFailed {
            reason: reason.into(),
        }
    }
}
