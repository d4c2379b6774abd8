//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, and error types that form the
//! vocabulary of the Mindguard domain.

mod emotional_state;
mod errors;
mod risk_level;
mod sentiment_score;

pub use emotional_state::EmotionalState;
pub use errors::{AnalysisError, ValidationError};
pub use risk_level::RiskLevel;
pub use sentiment_score::SentimentScore;
