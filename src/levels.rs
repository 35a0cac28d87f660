//! Level progression: the ordered table of level configurations.
//!
//! The table is immutable after construction; the only mutable state is
//! the 1-based current-level pointer. The orchestrating layer decides
//! policy: advance on a win, restage the same level on a loss, reset to
//! level 1 for a full restart.
//!
//! Lookups clamp rather than fail: asking for a level beyond the table
//! silently reuses the last defined level. That is intentional fallback
//! behavior (an endless tail of the hardest level), not an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Error, LevelConfig, Result};

/// Ordered table of level configs plus the current-level pointer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelProgression {
    configs: Vec<LevelConfig>,
    current_level: u32,
}

impl LevelProgression {
    /// Build a progression from an ordered config table.
    ///
    /// Starts at level 1. Fails with `InvalidConfiguration` when the
    /// table is empty.
    pub fn new(configs: Vec<LevelConfig>) -> Result<Self> {
        if configs.is_empty() {
            return Err(Error::invalid_configuration(
                "level table must have at least one entry",
            ));
        }

        Ok(Self {
            configs,
            current_level: 1,
        })
    }

    /// Number of defined levels.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.configs.len()
    }

    /// 1-based current level number.
    #[must_use]
    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    /// Config for a 1-based level number, clamped to the table.
    ///
    /// Level 0 maps to the first entry; anything past the end maps to
    /// the last.
    #[must_use]
    pub fn config(&self, level_number: u32) -> &LevelConfig {
        let index = (level_number.saturating_sub(1) as usize).min(self.configs.len() - 1);
        &self.configs[index]
    }

    /// Config for the current level.
    #[must_use]
    pub fn current_config(&self) -> &LevelConfig {
        self.config(self.current_level)
    }

    /// Whether another level is defined after `level_number`.
    #[must_use]
    pub fn has_next_level(&self, level_number: u32) -> bool {
        (level_number as usize) < self.configs.len()
    }

    /// Move the pointer to the next level.
    ///
    /// The caller decides when: typically after a win on a level that
    /// has a successor. Advancing past the end is allowed; lookups clamp.
    pub fn advance(&mut self) {
        self.current_level += 1;
        debug!(level = self.current_level, "progression advanced");
    }

    /// Reset the pointer to level 1.
    pub fn reset(&mut self) {
        self.current_level = 1;
        debug!("progression reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_levels() -> LevelProgression {
        LevelProgression::new(vec![
            LevelConfig::new(1, 2, -1, -1.0, 1.0).unwrap(),
            LevelConfig::new(2, 4, 12, 60.0, 1.5).unwrap(),
            LevelConfig::new(3, 6, 10, 45.0, 2.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = LevelProgression::new(vec![]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_lookup_is_one_based() {
        let progression = three_levels();

        assert_eq!(progression.config(1).pair_count, 2);
        assert_eq!(progression.config(2).pair_count, 4);
        assert_eq!(progression.config(3).pair_count, 6);
    }

    #[test]
    fn test_lookup_clamps_out_of_range() {
        let progression = three_levels();

        // Beyond the table: last level.
        assert_eq!(progression.config(4), progression.config(3));
        assert_eq!(progression.config(100), progression.config(3));
        // Level 0: first level.
        assert_eq!(progression.config(0), progression.config(1));
    }

    #[test]
    fn test_has_next_level() {
        let progression = three_levels();

        assert!(progression.has_next_level(1));
        assert!(progression.has_next_level(2));
        assert!(!progression.has_next_level(3));
        assert!(!progression.has_next_level(4));
    }

    #[test]
    fn test_advance_and_reset() {
        let mut progression = three_levels();
        assert_eq!(progression.current_level(), 1);

        progression.advance();
        assert_eq!(progression.current_level(), 2);
        assert_eq!(progression.current_config().pair_count, 4);

        progression.reset();
        assert_eq!(progression.current_level(), 1);
    }

    #[test]
    fn test_advance_past_end_clamps_lookup() {
        let mut progression = three_levels();
        for _ in 0..10 {
            progression.advance();
        }

        assert_eq!(progression.current_level(), 11);
        assert_eq!(progression.current_config().pair_count, 6);
    }
}
