//! Domain layer containing the analysis logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `lexicon` - Fixed keyword categories, classification, phrase detection
//! - `analysis` - Pure services turning matches and valence into results
//! - `conversation` - Message history input types for aggregation

pub mod analysis;
pub mod conversation;
pub mod foundation;
pub mod lexicon;
