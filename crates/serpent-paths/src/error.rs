use std::fmt;

use serpent_core::Point;

use crate::metrics::SearchStats;

/// The open set ran dry before the goal was reached.
///
/// Recoverable: the caller falls back to a random safe move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoPathFound {
    /// Statistics of the failed run.
    pub stats: SearchStats,
}

impl fmt::Display for NoPathFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} search found no path after expanding {} nodes",
            self.stats.strategy, self.stats.expanded
        )
    }
}

impl std::error::Error for NoPathFound {}

/// Every neighbor of the head is blocked: the game is lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NoSafeMove {
    pub head: Point,
}

impl fmt::Display for NoSafeMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no safe move from {}", self.head)
    }
}

impl std::error::Error for NoSafeMove {}
