//! Engine configuration.
//!
//! Hosts configure the engine at startup by providing:
//! - `ClockConfig`: seconds consumed by each class of play
//! - `ScoringConfig`: touchdown value and the post-score kickoff spot
//! - `EngineConfig`: combines all configuration
//!
//! Every field has a default matching the standard rules, so a partial
//! JSON document deserializes into a complete config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds in one quarter.
pub const QUARTER_SECONDS: u32 = 15 * 60;

/// Yards to gain for a fresh set of downs.
pub const FIRST_DOWN_DISTANCE: i32 = 10;

/// Timeouts each side starts with.
pub const TIMEOUTS_PER_HALF: u8 = 3;

/// Errors raised when engine configuration invariants are violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("kickoff spot must be between 1 and 99 (got {0})")]
    KickoffSpot(i32),
    #[error("touchdown must be worth at least one point")]
    ZeroTouchdown,
    #[error("{field} runoff cannot exceed a quarter ({value}s > {max}s)")]
    RunoffTooLong {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Seconds taken off the clock per play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Spike or kneel.
    pub spike_kneel_seconds: u32,
    /// Any other play gaining zero or negative yards.
    pub no_gain_seconds: u32,
    /// Any play gaining positive yards.
    pub gain_seconds: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            spike_kneel_seconds: 5,
            no_gain_seconds: 15,
            gain_seconds: 25,
        }
    }
}

/// Scoring and restart rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points credited for a touchdown.
    pub touchdown_points: u32,
    /// Receiving team's spot after a score, measured from its own goal line.
    pub kickoff_spot: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            touchdown_points: 6,
            kickoff_spot: 25,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub clock: ClockConfig,
    pub scoring: ScoringConfig,
}

impl EngineConfig {
    /// Replace the clock rules.
    #[must_use]
    pub fn with_clock(mut self, clock: ClockConfig) -> Self {
        self.clock = clock;
        self
    }

    /// Set the touchdown value.
    #[must_use]
    pub fn with_touchdown_points(mut self, points: u32) -> Self {
        self.scoring.touchdown_points = points;
        self
    }

    /// Set the post-score kickoff spot.
    #[must_use]
    pub fn with_kickoff_spot(mut self, spot: i32) -> Self {
        self.scoring.kickoff_spot = spot;
        self
    }

    /// Check the invariants resolution relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=99).contains(&self.scoring.kickoff_spot) {
            return Err(ConfigError::KickoffSpot(self.scoring.kickoff_spot));
        }
        if self.scoring.touchdown_points == 0 {
            return Err(ConfigError::ZeroTouchdown);
        }

        let runoffs = [
            ("spike/kneel", self.clock.spike_kneel_seconds),
            ("no-gain", self.clock.no_gain_seconds),
            ("gain", self.clock.gain_seconds),
        ];
        for (field, value) in runoffs {
            if value > QUARTER_SECONDS {
                return Err(ConfigError::RunoffTooLong {
                    field,
                    value,
                    max: QUARTER_SECONDS,
                });
            }
        }
        Ok(())
    }
}
