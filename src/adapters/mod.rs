//! Adapters - Concrete implementations of ports.

mod wordlist_scorer;

pub use wordlist_scorer::WordlistValenceScorer;
