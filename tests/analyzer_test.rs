//! End-to-end scenarios for the analysis engine.

use std::sync::Arc;

use proptest::prelude::*;

use mindguard::adapters::WordlistValenceScorer;
use mindguard::application::MessageAnalyzer;
use mindguard::config::EngineConfig;
use mindguard::domain::analysis::{CacheSettings, ScoreScale};
use mindguard::domain::conversation::ConversationMessage;
use mindguard::domain::foundation::{EmotionalState, RiskLevel};

fn engine() -> MessageAnalyzer {
    init_tracing();
    MessageAnalyzer::new(
        EngineConfig::default(),
        Arc::new(WordlistValenceScorer::new()),
    )
    .expect("default configuration is valid")
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

fn history(bodies: &[&str]) -> Vec<ConversationMessage> {
    bodies
        .iter()
        .map(|body| ConversationMessage::text(*body))
        .collect()
}

#[test]
fn neutral_text_scores_the_midpoint() {
    let analysis = engine()
        .analyze_message("the package arrives on Thursday")
        .unwrap();
    assert_eq!(analysis.sentiment_score.value(), 50);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert_eq!(analysis.emotional_state, EmotionalState::Neutral);
    assert!(analysis.keywords.is_empty());
}

#[test]
fn concerning_phrase_overrides_positive_wording() {
    let engine = engine();
    let analysis = engine
        .analyze_message("Everything is wonderful and amazing but I want to die")
        .unwrap();
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert_eq!(analysis.emotional_state, EmotionalState::Negative);
    assert!(engine.should_alert(&analysis));
}

#[test]
fn explicit_self_harm_message_alerts() {
    let engine = engine();
    let analysis = engine.analyze_message("I am going to kill myself").unwrap();
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert!(analysis.sentiment_score.value() <= 20);
    assert!(engine.should_alert(&analysis));
}

#[test]
fn hopeless_message_is_flagged_with_keywords() {
    let analysis = engine()
        .analyze_message("I feel hopeless and want to give up")
        .unwrap();
    assert!(analysis.risk_level >= RiskLevel::Medium);
    assert_eq!(analysis.emotional_state, EmotionalState::Negative);
    assert!(analysis.keywords.iter().any(|k| k == "hopeless"));
}

#[test]
fn grateful_message_is_low_and_positive() {
    let engine = engine();
    let analysis = engine
        .analyze_message("I am so happy and grateful today")
        .unwrap();
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert_eq!(analysis.emotional_state, EmotionalState::Positive);
    assert!(!engine.should_alert(&analysis));
}

#[test]
fn analysis_is_idempotent_across_calls() {
    let engine = engine();
    let text = "I'm anxious about the interview but hopeful";
    let first = engine.analyze_message(text).unwrap();
    let second = engine.analyze_message(text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn distinct_casing_is_a_distinct_cache_key_with_equal_result() {
    // Cache keys are exact text; the pipeline itself is case-insensitive,
    // so both spellings classify identically without sharing an entry.
    let engine = engine();
    let lower = engine.analyze_message("i feel hopeless").unwrap();
    let upper = engine.analyze_message("I FEEL HOPELESS").unwrap();
    assert_eq!(lower, upper);
}

#[test]
fn two_message_conversation_is_the_exact_neutral_default() {
    let engine = engine();
    let analysis = engine
        .analyze_conversation(&history(&["I want to die", "please help"]))
        .unwrap();
    assert_eq!(analysis.sentiment_score.value(), 50);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert_eq!(analysis.emotional_state, EmotionalState::Neutral);
    assert!(analysis.keywords.is_empty());
    assert_eq!(analysis.recommendations.len(), 1);
    assert_eq!(analysis.message_count, 2);
    assert_eq!(analysis.analyzed_count, 0);
}

#[test]
fn crisis_tail_raises_the_whole_conversation() {
    let engine = engine();
    let mut messages = history(&[
        "see you at the gym later",
        "sounds good",
        "picked up groceries",
        "watching the game tonight",
    ]);
    for _ in 0..5 {
        messages.push(ConversationMessage::text("I'm desperate, this is a crisis"));
    }
    let analysis = engine.analyze_conversation(&messages).unwrap();
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert!(engine.should_alert(&analysis));
}

#[test]
fn conversation_unions_keywords_across_messages() {
    let analysis = engine()
        .analyze_conversation(&history(&[
            "feeling sad lately",
            "and so worried about everything",
            "still sad today",
        ]))
        .unwrap();
    assert!(analysis.keywords.iter().any(|k| k == "sad"));
    assert!(analysis.keywords.iter().any(|k| k == "worried"));
    assert_eq!(
        analysis.keywords.iter().filter(|k| *k == "sad").count(),
        1
    );
}

#[test]
fn small_cache_still_produces_correct_results() {
    // A capacity-two cache under a longer history exercises eviction on
    // the real pipeline path.
    let config = EngineConfig {
        cache: CacheSettings { capacity: 2 },
        ..Default::default()
    };
    let engine = MessageAnalyzer::new(config, Arc::new(WordlistValenceScorer::new())).unwrap();

    let texts = ["one fine day", "I feel hopeless", "happy again", "one fine day"];
    for text in texts {
        let fresh = engine.analyze_message(text).unwrap();
        let again = engine.analyze_message(text).unwrap();
        assert_eq!(fresh, again, "{}", text);
    }
}

#[test]
fn raw_scale_reading_matches_the_percentage() {
    let analysis = engine().analyze_message("calm evening").unwrap();
    let percentage = analysis.scaled_score(ScoreScale::Percentage);
    let raw = analysis.scaled_score(ScoreScale::Raw);
    assert!((raw - (percentage / 10.0 - 5.0)).abs() < f64::EPSILON);
}

proptest! {
    #[test]
    fn score_is_always_bounded(text in "\\PC{0,200}") {
        let analysis = engine().analyze_message(&text).unwrap();
        prop_assert!(analysis.sentiment_score.value() <= 100);
    }

    #[test]
    fn concerning_text_is_always_high(prefix in "\\PC{0,40}", suffix in "\\PC{0,40}") {
        let text = format!("{} I want to die {}", prefix, suffix);
        let engine = engine();
        let analysis = engine.analyze_message(&text).unwrap();
        prop_assert_eq!(analysis.risk_level, RiskLevel::High);
        prop_assert_eq!(analysis.emotional_state, EmotionalState::Negative);
        prop_assert!(engine.should_alert(&analysis));
    }

    #[test]
    fn pipeline_is_deterministic(text in "\\PC{0,120}") {
        let engine = engine();
        let first = engine.analyze_message(&text).unwrap();
        let second = engine.analyze_message(&text).unwrap();
        prop_assert_eq!(first, second);
    }
}
