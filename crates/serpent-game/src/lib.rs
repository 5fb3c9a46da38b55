//! Headless snake game driving the serpent pathfinder.
//!
//! [`Game`] owns the snake, the food and the score, advances one cell per
//! [`tick`](Game::tick) and detects collisions. Movement comes either from
//! the player ([`Game::steer`]) or from the [`Autopilot`]. Rendering, input
//! and frame timing are left to the embedding application, which reads the
//! state back through the accessors.
//!
//! [`Autopilot`]: serpent_paths::Autopilot

pub mod config;
pub mod engine;
pub mod snake;

pub use config::{ConfigError, GameConfig};
pub use engine::{Cause, Game, Status, TickReport};
pub use snake::Snake;
