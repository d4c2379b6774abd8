//! Analysis module - Pure services turning valence and keyword matches
//! into risk classifications.
//!
//! Everything here is stateless computation except [`ResultCache`], which
//! is owned and serialized by the application-layer analyzer.

mod alert;
mod cache;
mod normalizer;
mod recommendations;
mod report;
mod risk;
mod settings;

pub use alert::AlertPolicy;
pub use cache::{CachedOutcome, ResultCache};
pub use normalizer::ScoreNormalizer;
pub use recommendations::RecommendationProvider;
pub use report::{ConversationAnalysis, MessageAnalysis, RiskAssessment};
pub use risk::RiskClassifier;
pub use settings::{AggregationSettings, CacheSettings, ScoreScale, ScoringSettings};
