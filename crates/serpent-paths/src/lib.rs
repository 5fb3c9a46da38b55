//! Pathfinding for an autonomous snake.
//!
//! The snake's head plans a route to the food on a bounded [`Playfield`],
//! treating its own body as an obstacle snapshot that is fixed for the
//! duration of one search. Two strategies share one node-expansion loop:
//!
//! - **Best-first / A\*** ([`Strategy::BestFirst`]): priority `g + h` with a
//!   Manhattan heuristic measured in steps.
//! - **Uniform cost** ([`Strategy::UniformCost`]): priority `g`.
//!
//! Searches run through a [`Pathfinder`], which owns the node arena and the
//! open/closed sets of one invocation. When no route exists the
//! [fallback](pick_fallback) picks a random safe neighbor, and the
//! [`Autopilot`] ties both together for one game tick.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor generation, fallback moves |
//! | [`AstarPather`] : [`Pather`] | both search strategies |
//!
//! [`Playfield`]: serpent_core::Playfield

mod autopilot;
mod distance;
mod error;
mod fallback;
mod frontier;
mod metrics;
mod neighbors;
mod node;
mod obstacles;
mod search;
mod traits;

pub use autopilot::{Autopilot, AutopilotConfig, Move, PlanReport};
pub use distance::manhattan;
pub use error::{NoPathFound, NoSafeMove};
pub use fallback::{pick_fallback, pick_random_neighbor};
pub use metrics::{ExpansionTracker, SearchStats};
pub use neighbors::{FieldView, neighbors};
pub use node::{NodeId, SearchNode};
pub use obstacles::ObstacleSet;
pub use search::{Path, PathPlan, Pathfinder, Revisit, SearchConfig, Strategy, find_path};
pub use traits::{AstarPather, Pather};
