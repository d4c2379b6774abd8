//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ValenceScorer` - Port for the raw word-polarity valence function

mod valence_scorer;

pub use valence_scorer::{ValenceError, ValenceScorer};
