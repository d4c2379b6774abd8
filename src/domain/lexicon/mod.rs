//! Lexicon module - Fixed keyword categories and matching.
//!
//! The six categories and the concerning-phrase list are static
//! configuration. Matching is case-insensitive substring search and is
//! deliberately not word-boundary aware: "stress" matches "stressed",
//! which catches inflections cheaply at the cost of occasional false
//! positives ("help" inside "helpful"). This imprecision is a documented
//! property of the lexicon design, not a bug.

mod category;
mod classifier;
mod concerning;

pub use category::{LexiconCategory, ScoreEffect};
pub use classifier::{CategoryMatches, KeywordClassifier};
pub use concerning::ConcerningPhraseDetector;
