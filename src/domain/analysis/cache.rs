//! Bounded FIFO cache of analysis outcomes.

use std::collections::{HashMap, VecDeque};

use crate::domain::foundation::{RiskLevel, SentimentScore, ValidationError};

use super::settings::CacheSettings;

/// The cached portion of an analysis: score, keywords, and risk level.
///
/// Emotional state and recommendations are re-derived on a hit, so cached
/// results stay correct when presentation-side configuration changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedOutcome {
    pub score: SentimentScore,
    pub keywords: Vec<String>,
    pub risk_level: RiskLevel,
}

/// Capacity-bounded text -> outcome cache with strict FIFO eviction.
///
/// The key is the exact message text: no case or whitespace normalization
/// is applied, so strings differing only in casing occupy distinct
/// entries deliberately. Eviction is oldest-inserted-first; re-putting an
/// existing key replaces the value without refreshing its position.
///
/// Not internally synchronized: the owning service serializes access
/// (a single lock around get/put pairs) to preserve the bound invariant
/// under concurrent load.
#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    order: VecDeque<String>,
    entries: HashMap<String, CachedOutcome>,
}

impl ResultCache {
    /// Creates a cache with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the configured capacity is zero;
    /// misconfiguration fails at construction time, not at first use.
    pub fn new(settings: &CacheSettings) -> Result<Self, ValidationError> {
        settings.validate()?;
        Ok(Self {
            capacity: settings.capacity,
            order: VecDeque::with_capacity(settings.capacity),
            entries: HashMap::with_capacity(settings.capacity),
        })
    }

    /// Looks up the outcome for exactly this text.
    pub fn get(&self, text: &str) -> Option<&CachedOutcome> {
        self.entries.get(text)
    }

    /// Inserts an outcome, evicting the oldest entry when at capacity.
    pub fn put(&mut self, text: &str, outcome: CachedOutcome) {
        if let Some(existing) = self.entries.get_mut(text) {
            // Known key: replace the value, keep the insertion position.
            *existing = outcome;
            return;
        }

        if self.order.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        self.order.push_back(text.to_string());
        self.entries.insert(text.to_string(), outcome);
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
