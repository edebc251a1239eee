//! Defaults and runtime configuration.
//!
//! The constants mirror what the portfolio page ships with; `LifeConfig`
//! groups the ones a host may override for the hero background.

use thiserror::Error;

/// Upper bound on `rows * cols` for a container-derived grid.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Side length of one cell in pixels.
pub const CELL_SIZE: f32 = 15.0;

/// Chance that a cell starts alive when the grid is seeded.
pub const ALIVE_PROBABILITY: f64 = 0.2;

/// The background advances one generation every this many redraws.
pub const STEP_EVERY_FRAMES: u32 = 8;

/// README sources longer than this many characters get a preview rendering.
pub const PREVIEW_THRESHOLD: usize = 500;

/// Appended to the truncated source before the preview is rendered.
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Host serving raw repository files.
pub const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";

/// Host whose `/blob/` pages get rewritten to raw URLs.
pub const REPO_WEB_HOST: &str = "github.com";

/// Branch used when resolving relative image paths.
pub const DEFAULT_BRANCH: &str = "main";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be a positive finite number of pixels, got {0}")]
    InvalidCellSize(f32),
    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
    #[error("step interval must be at least one frame")]
    ZeroStepInterval,
}

/// Settings for the hero background
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LifeConfig {
    pub cell_size: f32,
    pub alive_probability: f64,
    pub step_every_frames: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            alive_probability: ALIVE_PROBABILITY,
            step_every_frames: STEP_EVERY_FRAMES,
        }
    }
}

impl LifeConfig {
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_alive_probability(mut self, alive_probability: f64) -> Self {
        self.alive_probability = alive_probability;
        self
    }

    pub fn with_step_every_frames(mut self, frames: u32) -> Self {
        self.step_every_frames = frames;
        self
    }

    /// Reject settings the background cannot run with
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::InvalidProbability(self.alive_probability));
        }
        if self.step_every_frames == 0 {
            return Err(ConfigError::ZeroStepInterval);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LifeConfig::default();
        assert_eq!(config.cell_size, 15.0);
        assert_eq!(config.alive_probability, 0.2);
        assert_eq!(config.step_every_frames, 8);
        assert_eq!(config.validate(), Ok(config));
    }

    #[test]
    fn test_rejects_bad_cell_size() {
        for size in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let err = LifeConfig::default().with_cell_size(size).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidCellSize(_)));
        }
    }

    #[test]
    fn test_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let err = LifeConfig::default().with_alive_probability(p).validate().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidProbability(_)));
        }
        assert!(LifeConfig::default().with_alive_probability(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_interval() {
        assert_eq!(
            LifeConfig::default().with_step_every_frames(0).validate(),
            Err(ConfigError::ZeroStepInterval)
        );
    }
}
