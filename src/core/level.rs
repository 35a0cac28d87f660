//! Level configuration and budget sentinels.
//!
//! A [`LevelConfig`] is the immutable parameter set for one level: how many
//! pairs the board holds, how many turns the player may spend, how long the
//! clock runs, and how long the memorize preview lasts. Configs are owned by
//! the level progression table and looked up by level number.
//!
//! ## Budgets
//!
//! External configuration sources (level editors, serialized tables) use a
//! negative value for "no limit" on attempts and time. Internally that
//! sentinel normalizes to an explicit enum variant the moment a config is
//! built - the rest of the engine never compares against raw negatives.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Attempt budget for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptBudget {
    /// No limit; turns never exhaust the session.
    Unlimited,
    /// At most this many completed turns.
    Limited(u32),
}

impl AttemptBudget {
    /// Normalize a raw configuration value. Negative means unlimited.
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        if raw < 0 {
            Self::Unlimited
        } else {
            Self::Limited(raw as u32)
        }
    }

    /// Whether this budget imposes a limit.
    #[must_use]
    pub fn is_limited(self) -> bool {
        matches!(self, Self::Limited(_))
    }
}

/// Time budget for one session, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TimeBudget {
    /// No clock; ticks never exhaust the session.
    Unlimited,
    /// At most this many seconds of play.
    Limited(f32),
}

impl TimeBudget {
    /// Normalize a raw configuration value. Negative means unlimited.
    #[must_use]
    pub fn from_raw(raw: f32) -> Self {
        if raw < 0.0 {
            Self::Unlimited
        } else {
            Self::Limited(raw)
        }
    }

    /// Whether this budget imposes a limit.
    #[must_use]
    pub fn is_limited(self) -> bool {
        matches!(self, Self::Limited(_))
    }
}

/// Immutable parameters for one level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 1-based level number, for display and progression bookkeeping.
    pub level_number: u32,

    /// Number of matchable pairs on the board. Must be positive.
    pub pair_count: u32,

    /// Turn budget.
    pub max_attempts: AttemptBudget,

    /// Clock budget.
    pub time_limit: TimeBudget,

    /// How long the face-up preview lasts before play starts, in seconds.
    /// Consumed by view layers only; the engine never waits on it.
    pub memorize_duration: f32,
}

impl LevelConfig {
    /// Create a config from raw values as a level table would supply them.
    ///
    /// Negative `max_attempts` / `time_limit` mean unlimited. Fails with
    /// `InvalidConfiguration` when `pair_count == 0` or
    /// `memorize_duration < 0`.
    pub fn new(
        level_number: u32,
        pair_count: u32,
        max_attempts: i32,
        time_limit: f32,
        memorize_duration: f32,
    ) -> Result<Self> {
        if pair_count == 0 {
            return Err(Error::invalid_configuration(format!(
                "level {level_number}: pair count must be positive"
            )));
        }
        if memorize_duration < 0.0 {
            return Err(Error::invalid_configuration(format!(
                "level {level_number}: memorize duration must be >= 0"
            )));
        }

        Ok(Self {
            level_number,
            pair_count,
            max_attempts: AttemptBudget::from_raw(max_attempts),
            time_limit: TimeBudget::from_raw(time_limit),
            memorize_duration,
        })
    }
}
