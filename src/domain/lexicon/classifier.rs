//! Keyword classification against the category lexicons.

use std::collections::BTreeMap;

use super::category::LexiconCategory;

/// Per-category matched terms for one message.
///
/// Only categories with at least one match are present. Term lists keep
/// lexicon declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMatches {
    matches: BTreeMap<LexiconCategory, Vec<&'static str>>,
}

impl CategoryMatches {
    /// Returns true if no category matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Returns true if the category matched at least one term.
    pub fn contains(&self, category: LexiconCategory) -> bool {
        self.matches.contains_key(&category)
    }

    /// Returns the number of terms matched in the category.
    pub fn count(&self, category: LexiconCategory) -> usize {
        self.matches.get(&category).map_or(0, Vec::len)
    }

    /// Returns the terms matched in the category, if any.
    pub fn terms(&self, category: LexiconCategory) -> Option<&[&'static str]> {
        self.matches.get(&category).map(Vec::as_slice)
    }

    /// Returns true if any category forcing HIGH risk matched.
    pub fn has_high_risk(&self) -> bool {
        self.matches.keys().any(LexiconCategory::is_high_risk)
    }

    /// Returns true if any category raising risk to MEDIUM matched.
    pub fn has_elevated_risk(&self) -> bool {
        self.matches.keys().any(LexiconCategory::is_elevated_risk)
    }

    /// Returns all matched terms across categories, deduplicated.
    pub fn all_terms(&self) -> Vec<&'static str> {
        let mut terms: Vec<&'static str> = Vec::new();
        for matched in self.matches.values() {
            for term in matched {
                if !terms.contains(term) {
                    terms.push(term);
                }
            }
        }
        terms
    }
}

/// Classifier matching message text against the six category lexicons.
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Matches `text` against every category lexicon.
    ///
    /// A term matches if it appears anywhere in the lowercased text;
    /// matching is substring-based, not word-boundary aware.
    pub fn classify(text: &str) -> CategoryMatches {
        let lowered = text.to_lowercase();
        let mut matches = BTreeMap::new();

        for category in LexiconCategory::ALL {
            let matched: Vec<&'static str> = category
                .terms()
                .iter()
                .filter(|term| lowered.contains(*term))
                .copied()
                .collect();
            if !matched.is_empty() {
                matches.insert(category, matched);
            }
        }

        CategoryMatches { matches }
    }
}
