//! Message analyzer service.
//!
//! Runs the single-message pipeline (phrase detection + keyword
//! classification, normalization, risk classification, recommendations)
//! behind the result cache, and aggregates it over conversation
//! histories with recency weighting.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::domain::analysis::{
    AlertPolicy, CachedOutcome, ConversationAnalysis, MessageAnalysis, RecommendationProvider,
    ResultCache, RiskAssessment, RiskClassifier, ScoreNormalizer,
};
use crate::domain::conversation::ConversationMessage;
use crate::domain::foundation::{
    AnalysisError, EmotionalState, RiskLevel, SentimentScore, ValidationError,
};
use crate::domain::lexicon::{ConcerningPhraseDetector, KeywordClassifier};
use crate::ports::ValenceScorer;

/// Synchronous analysis engine, constructed once at service startup.
///
/// The analyzer owns the result cache explicitly (no module-level
/// singleton) and serializes access with a single lock, preserving the
/// FIFO bound under concurrent callers. All other state is immutable
/// configuration, so the service is `Send + Sync` and safe to share
/// behind an `Arc` in a concurrent host.
pub struct MessageAnalyzer {
    config: EngineConfig,
    scorer: Arc<dyn ValenceScorer>,
    cache: Mutex<ResultCache>,
}

impl MessageAnalyzer {
    /// Creates the analyzer from validated configuration and an injected
    /// valence scorer.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configured threshold or the cache
    /// capacity is invalid.
    pub fn new(
        config: EngineConfig,
        scorer: Arc<dyn ValenceScorer>,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        let cache = ResultCache::new(&config.cache)?;
        Ok(Self {
            config,
            scorer,
            cache: Mutex::new(cache),
        })
    }

    /// Analyzes one message text.
    ///
    /// Deterministic and idempotent: identical text yields an identical
    /// analysis, served from the cache on repeat calls. Empty or
    /// whitespace-only text is valid input and classifies as LOW/NEUTRAL
    /// with no keywords.
    ///
    /// # Errors
    ///
    /// Propagates a valence scorer failure; no neutral fallback is
    /// substituted.
    pub fn analyze_message(&self, text: &str) -> Result<MessageAnalysis, AnalysisError> {
        let outcome = self.cached_outcome(text)?;
        Ok(self.report_from(outcome))
    }

    /// Aggregates the single-message pipeline over a conversation history,
    /// ordered oldest to newest.
    ///
    /// Histories shorter than the configured minimum return a fixed
    /// neutral default instead of a statistic over a meaningless sample.
    /// Bodiless messages are skipped, not treated as empty strings.
    pub fn analyze_conversation(
        &self,
        messages: &[ConversationMessage],
    ) -> Result<ConversationAnalysis, AnalysisError> {
        let message_count = messages.len();
        if message_count < self.config.aggregation.min_messages {
            return Ok(self.neutral_conversation(message_count));
        }

        // Position is kept alongside each outcome so the recency window
        // slices the raw history, not just the analyzable subset.
        let mut outcomes: Vec<(usize, CachedOutcome)> = Vec::with_capacity(message_count);
        for (position, message) in messages.iter().enumerate() {
            if let Some(body) = message.body() {
                outcomes.push((position, self.cached_outcome(body)?));
            }
        }

        let analyzed_count = outcomes.len();
        let average = Self::average_score(&outcomes);
        let keywords = Self::union_keywords(&outcomes);
        let risk_level = self.dominant_risk(&outcomes, message_count, average);

        Ok(ConversationAnalysis {
            sentiment_score: average,
            emotional_state: self.emotional_state(average),
            risk_level,
            keywords,
            recommendations: RecommendationProvider::for_level(risk_level),
            message_count,
            analyzed_count,
        })
    }

    /// Returns true if the analysis should trigger the host's
    /// notification path.
    pub fn should_alert(&self, analysis: &impl RiskAssessment) -> bool {
        AlertPolicy::should_alert(analysis, &self.config.scoring)
    }

    /// Runs the pipeline for one text, via the cache.
    fn cached_outcome(&self, text: &str) -> Result<CachedOutcome, AnalysisError> {
        // The cache key is the exact text; only identical strings hit.
        {
            let cache = self.cache.lock().expect("result cache lock poisoned");
            if let Some(hit) = cache.get(text) {
                debug!(len = text.len(), "analysis served from cache");
                return Ok(hit.clone());
            }
        }

        // The scorer runs outside the lock; a concurrent duplicate
        // computation is harmless because the pipeline is deterministic.
        let concerning = ConcerningPhraseDetector::first_match(text);
        if let Some(phrase) = concerning {
            warn!(phrase, "concerning phrase detected, forcing HIGH risk");
        }
        let matches = KeywordClassifier::classify(text);
        let raw_valence = self.scorer.raw_score(text)?;

        let score = ScoreNormalizer::normalize(
            raw_valence,
            &matches,
            concerning.is_some(),
            &self.config.scoring,
        );
        let risk_level =
            RiskClassifier::classify(&matches, score, concerning.is_some(), &self.config.scoring);
        let keywords: Vec<String> = matches
            .all_terms()
            .into_iter()
            .map(str::to_string)
            .collect();

        let outcome = CachedOutcome {
            score,
            keywords,
            risk_level,
        };

        let mut cache = self.cache.lock().expect("result cache lock poisoned");
        cache.put(text, outcome.clone());
        Ok(outcome)
    }

    /// Re-derives the full report shape from a cached outcome.
    fn report_from(&self, outcome: CachedOutcome) -> MessageAnalysis {
        MessageAnalysis {
            sentiment_score: outcome.score,
            emotional_state: self.emotional_state(outcome.score),
            risk_level: outcome.risk_level,
            recommendations: RecommendationProvider::for_level(outcome.risk_level),
            keywords: outcome.keywords,
        }
    }

    fn emotional_state(&self, score: SentimentScore) -> EmotionalState {
        EmotionalState::from_score(
            score,
            self.config.scoring.negative_below,
            self.config.scoring.positive_above,
        )
    }

    /// Fixed result for histories too short to aggregate.
    fn neutral_conversation(&self, message_count: usize) -> ConversationAnalysis {
        ConversationAnalysis {
            sentiment_score: SentimentScore::NEUTRAL,
            emotional_state: self.emotional_state(SentimentScore::NEUTRAL),
            risk_level: RiskLevel::Low,
            keywords: vec![],
            recommendations: RecommendationProvider::neutral_default(),
            message_count,
            analyzed_count: 0,
        }
    }

    /// Integer average of per-message scores; neutral when nothing was
    /// analyzable.
    fn average_score(outcomes: &[(usize, CachedOutcome)]) -> SentimentScore {
        if outcomes.is_empty() {
            return SentimentScore::NEUTRAL;
        }
        let sum: u32 = outcomes
            .iter()
            .map(|(_, outcome)| u32::from(outcome.score.value()))
            .sum();
        let count = outcomes.len() as u32;
        SentimentScore::new(((sum + count / 2) / count) as u8)
    }

    /// Union of per-message keyword sets, first-seen order.
    fn union_keywords(outcomes: &[(usize, CachedOutcome)]) -> Vec<String> {
        let mut keywords: Vec<String> = Vec::new();
        for (_, outcome) in outcomes {
            for keyword in &outcome.keywords {
                if !keywords.contains(keyword) {
                    keywords.push(keyword.clone());
                }
            }
        }
        keywords
    }

    /// Dominant risk level with recency weighting.
    ///
    /// The full-history maximum is the floor; the trailing-window maximum
    /// can raise it but a calm recent window never suppresses older HIGH
    /// signal. The score corrections then run on the averaged score,
    /// which can still soften a MEDIUM when the overall tone is strongly
    /// positive.
    fn dominant_risk(
        &self,
        outcomes: &[(usize, CachedOutcome)],
        message_count: usize,
        average: SentimentScore,
    ) -> RiskLevel {
        let full_max = outcomes
            .iter()
            .map(|(_, outcome)| outcome.risk_level)
            .max()
            .unwrap_or(RiskLevel::Low);

        let window_start = message_count.saturating_sub(self.config.aggregation.recent_window);
        let recent_max = outcomes
            .iter()
            .filter(|(position, _)| *position >= window_start)
            .map(|(_, outcome)| outcome.risk_level)
            .max()
            .unwrap_or(RiskLevel::Low);

        let base = full_max.escalate_to(recent_max);
        RiskClassifier::apply_corrections(base, average, &self.config.scoring)
    }
}
