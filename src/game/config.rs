//! Game configuration

use crate::generator::DEFAULT_MAX_ATTEMPTS;
use rand::Rng;
use std::fmt;

/// Default grid side length
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Largest supported grid side length
pub const MAX_GRID_SIZE: usize = 99;

/// Settings for building a puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_attempts: usize,
    /// Random seed; a fresh one is drawn when `None`
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

/// Error type for invalid settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    GridSize(usize),
    MaxAttempts,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridSize(size) => {
                write!(f, "Grid size must be between 1 and {MAX_GRID_SIZE}, got {size}")
            }
            Self::MaxAttempts => write!(f, "Placement attempts must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Config with a fixed seed and otherwise default settings
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check the settings are usable
    ///
    /// # Errors
    /// Returns `ConfigError` for a grid size outside `1..=99` or a zero attempt budget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::MaxAttempts);
        }
        Ok(())
    }

    /// The configured seed, or a freshly drawn one
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ten_by_ten() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_oversized_grids() {
        for size in [0, 100] {
            let config = GameConfig {
                grid_size: size,
                ..GameConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::GridSize(size)));
        }
    }

    #[test]
    fn rejects_zero_attempts() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MaxAttempts));
    }

    #[test]
    fn fixed_seed_is_kept() {
        assert_eq!(GameConfig::with_seed(77).resolve_seed(), 77);
    }
}
