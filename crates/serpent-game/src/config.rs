use std::fmt;

use serpent_core::{Playfield, Point};
use serpent_paths::AutopilotConfig;

/// Configuration for a game.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Playfield width, in units.
    pub width: i32,
    /// Playfield height, in units.
    pub height: i32,
    /// Size of one body segment; the head moves this far per tick.
    pub step: i32,
    /// Where the head spawns. Must be an aligned in-bounds cell.
    pub initial_head: Point,
    /// Points awarded per food eaten.
    pub food_score: u32,
    /// Suggested tick rate for a real-time front end.
    pub ticks_per_second: u32,
    /// Start new games with the autopilot engaged.
    pub autopilot_enabled: bool,
    pub autopilot: AutopilotConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 700,
            height: 600,
            step: 19,
            initial_head: Point::ZERO,
            food_score: 10,
            ticks_per_second: 11,
            autopilot_enabled: false,
            autopilot: AutopilotConfig::default(),
        }
    }
}

impl GameConfig {
    /// A unit-step grid of `cols × rows` cells.
    pub fn grid(cols: i32, rows: i32) -> Self {
        Self {
            width: cols,
            height: rows,
            step: 1,
            ..Default::default()
        }
    }

    /// A 10×10 grid for testing.
    pub fn small() -> Self {
        Self::grid(10, 10)
    }

    /// Check the configuration and build its playfield.
    pub fn validate(&self) -> Result<Playfield, ConfigError> {
        if self.step <= 0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if self.width < self.step || self.height < self.step {
            return Err(ConfigError::TooSmall {
                width: self.width,
                height: self.height,
                step: self.step,
            });
        }
        let field = Playfield::new(self.width, self.height, self.step);
        if !field.in_bounds(self.initial_head) || !field.is_aligned(self.initial_head) {
            return Err(ConfigError::MisplacedHead(self.initial_head));
        }
        Ok(field)
    }
}

/// Errors reported by [`GameConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NonPositiveStep(i32),
    /// The playfield cannot hold a single cell.
    TooSmall { width: i32, height: i32, step: i32 },
    /// The initial head is out of bounds or off the step lattice.
    MisplacedHead(Point),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveStep(step) => write!(f, "step must be positive, got {step}"),
            Self::TooSmall {
                width,
                height,
                step,
            } => write!(f, "a {width}x{height} playfield cannot hold a cell of size {step}"),
            Self::MisplacedHead(p) => write!(f, "initial head {p} is not a playfield cell"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        let field = config.validate().unwrap();
        assert_eq!(field.step(), 19);
        assert_eq!(config.food_score, 10);
        assert_eq!(config.ticks_per_second, 11);
        assert!(!config.autopilot_enabled);
    }

    #[test]
    fn grid_config() {
        let field = GameConfig::small().validate().unwrap();
        assert_eq!(field.cell_count(), 100);
    }

    #[test]
    fn rejects_bad_step() {
        let config = GameConfig {
            step: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveStep(0)));
    }

    #[test]
    fn rejects_tiny_field() {
        let config = GameConfig {
            width: 10,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooSmall { .. })));
    }

    #[test]
    fn rejects_misaligned_head() {
        let config = GameConfig {
            initial_head: Point::new(20, 0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::MisplacedHead(Point::new(20, 0)));
        assert_eq!(err.to_string(), "initial head (20, 0) is not a playfield cell");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let config = GameConfig::small();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
