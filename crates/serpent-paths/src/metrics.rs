//! Diagnostics reported by search runs.
//!
//! Nothing here feeds back into planning; the numbers are for display and
//! for comparing the two strategies.

use std::time::Duration;

use crate::search::Strategy;

/// What one search run cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub strategy: Strategy,
    /// Size of the closed set when the run terminated.
    pub expanded: usize,
    /// Wall-clock time spent in the run.
    pub elapsed: Duration,
    /// Number of moves in the path found, 0 on failure.
    pub path_len: usize,
}

/// Running maximum of expanded nodes per strategy, across ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpansionTracker {
    best_first: usize,
    uniform_cost: usize,
}

impl ExpansionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one run. Returns `true` if it set a new maximum for its
    /// strategy.
    pub fn record(&mut self, stats: &SearchStats) -> bool {
        let max = match stats.strategy {
            Strategy::BestFirst => &mut self.best_first,
            Strategy::UniformCost => &mut self.uniform_cost,
        };
        if stats.expanded > *max {
            *max = stats.expanded;
            true
        } else {
            false
        }
    }

    /// Largest number of nodes a single run of `strategy` has expanded.
    pub fn max_expanded(&self, strategy: Strategy) -> usize {
        match strategy {
            Strategy::BestFirst => self.best_first,
            Strategy::UniformCost => self.uniform_cost,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(strategy: Strategy, expanded: usize) -> SearchStats {
        SearchStats {
            strategy,
            expanded,
            elapsed: Duration::ZERO,
            path_len: 0,
        }
    }

    #[test]
    fn tracks_maximum_per_strategy() {
        let mut t = ExpansionTracker::new();
        assert!(t.record(&stats(Strategy::BestFirst, 4)));
        assert!(!t.record(&stats(Strategy::BestFirst, 4)));
        assert!(!t.record(&stats(Strategy::BestFirst, 2)));
        assert!(t.record(&stats(Strategy::UniformCost, 9)));
        assert!(t.record(&stats(Strategy::BestFirst, 5)));
        assert_eq!(t.max_expanded(Strategy::BestFirst), 5);
        assert_eq!(t.max_expanded(Strategy::UniformCost), 9);
        t.reset();
        assert_eq!(t.max_expanded(Strategy::UniformCost), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn stats_round_trip() {
        let s = SearchStats {
            strategy: Strategy::UniformCost,
            expanded: 37,
            elapsed: Duration::from_micros(120),
            path_len: 11,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
