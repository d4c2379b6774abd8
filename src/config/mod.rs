//! Engine configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `MINDGUARD`
//! prefix and nested sections use double underscores as separators.
//! Every threshold defaults to the engine's canonical value, so an empty
//! environment yields a fully working configuration.
//!
//! # Example
//!
//! ```no_run
//! use mindguard::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;

pub use error::ConfigError;

use serde::Deserialize;

use crate::domain::analysis::{AggregationSettings, CacheSettings, ScoringSettings};
use crate::domain::foundation::ValidationError;

/// Root engine configuration.
///
/// Load with [`EngineConfig::load()`] or construct directly for embedded
/// use; `Default` carries the canonical thresholds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Scoring, emotional-state, and alerting thresholds.
    pub scoring: ScoringSettings,

    /// Conversation aggregation settings.
    pub aggregation: AggregationSettings,

    /// Result cache settings.
    pub cache: CacheSettings,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present (development), then environment
    /// variables with the `MINDGUARD` prefix:
    ///
    /// - `MINDGUARD__SCORING__CRISIS_SCORE_CAP=15` -> `scoring.crisis_score_cap = 15`
    /// - `MINDGUARD__CACHE__CAPACITY=500` -> `cache.capacity = 500`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types or fail semantic validation.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MINDGUARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration sections.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any threshold is out of range, the
    /// cutoffs are inverted, or the cache capacity is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scoring.validate()?;
        self.aggregation.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}
