//! Tuning constants for every game.
//!
//! Defaults reproduce the feel of the shipped games; a JSON document can override any
//! subset of fields.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("option_count must be at least 1")]
    NoOptions,

    #[error("{section}.max_level must be at least 1")]
    NoLevels { section: &'static str },

    #[error("memory.base_pairs and memory.max_pairs must be at least 1")]
    NoPairs,

    #[error("tempo range is empty: min {min} > max {max}")]
    TempoRange { min: u32, max: u32 },

    #[error("tempo must be positive")]
    ZeroTempo,

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shared settings of the round-based quiz controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    pub reward_points: u32,
    pub max_level: u32,
    pub advance_delay_ms: u64,
    pub retry_delay_ms: u64,
    pub timeout_delay_ms: u64,
    /// Per-question countdown; `None` for untimed games.
    pub countdown_secs: Option<u32>,
}

impl RoundConfig {
    #[must_use]
    pub fn quiz() -> Self {
        Self {
            reward_points: 10,
            max_level: 10,
            advance_delay_ms: 1500,
            retry_delay_ms: 1500,
            timeout_delay_ms: 1500,
            countdown_secs: None,
        }
    }

    #[must_use]
    pub fn daily() -> Self {
        Self {
            max_level: 5,
            countdown_secs: Some(30),
            ..Self::quiz()
        }
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    #[must_use]
    pub fn timeout_delay(&self) -> Duration {
        Duration::from_millis(self.timeout_delay_ms)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::quiz()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub base_pairs: u32,
    pub max_pairs: u32,
    pub mismatch_delay_ms: u64,
    pub match_release_delay_ms: u64,
    pub points_per_level: u32,
    pub extra_move_penalty: u32,
    pub seconds_per_penalty: u32,
    pub min_score: u32,
}

impl MemoryConfig {
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    #[must_use]
    pub fn match_release_delay(&self) -> Duration {
        Duration::from_millis(self.match_release_delay_ms)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base_pairs: 4,
            max_pairs: 12,
            mismatch_delay_ms: 1000,
            match_release_delay_ms: 500,
            points_per_level: 10,
            extra_move_penalty: 2,
            seconds_per_penalty: 10,
            min_score: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    pub min_score: u32,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self { min_score: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    pub default_tempo: u32,
    pub min_tempo: u32,
    pub max_tempo: u32,
    pub default_volume: u8,
    pub save_reward: u32,
}

impl SequencerConfig {
    /// Clamp a requested tempo into the configured range.
    #[must_use]
    pub fn clamp_tempo(&self, bpm: u32) -> u32 {
        bpm.clamp(self.min_tempo, self.max_tempo)
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            default_tempo: 120,
            min_tempo: 60,
            max_tempo: 200,
            default_volume: 50,
            save_reward: 10,
        }
    }
}

/// All game tuning in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Options shown per quiz question, answer included.
    pub option_count: usize,
    pub quiz: RoundConfig,
    pub daily: RoundConfig,
    pub memory: MemoryConfig,
    pub sorting: SortingConfig,
    pub sequencer: SequencerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            option_count: 3,
            quiz: RoundConfig::quiz(),
            daily: RoundConfig::daily(),
            memory: MemoryConfig::default(),
            sorting: SortingConfig::default(),
            sequencer: SequencerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse JSON overrides on top of the defaults and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON, or a validation error.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when a value would make a game unplayable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.option_count == 0 {
            return Err(ConfigError::NoOptions);
        }
        if self.quiz.max_level == 0 {
            return Err(ConfigError::NoLevels { section: "quiz" });
        }
        if self.daily.max_level == 0 {
            return Err(ConfigError::NoLevels { section: "daily" });
        }
        if self.memory.base_pairs == 0 || self.memory.max_pairs == 0 {
            return Err(ConfigError::NoPairs);
        }
        let sequencer = &self.sequencer;
        if sequencer.min_tempo == 0 {
            return Err(ConfigError::ZeroTempo);
        }
        if sequencer.min_tempo > sequencer.max_tempo {
            return Err(ConfigError::TempoRange {
                min: sequencer.min_tempo,
                max: sequencer.max_tempo,
            });
        }
        Ok(())
    }
}
