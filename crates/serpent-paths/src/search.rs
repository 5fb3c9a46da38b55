//! The unified best-first / uniform-cost search.

use std::fmt;
use std::time::Instant;

use serpent_core::{Playfield, Point};

use crate::error::NoPathFound;
use crate::frontier::{ClosedSet, OpenSet};
use crate::metrics::SearchStats;
use crate::neighbors::FieldView;
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::obstacles::ObstacleSet;
use crate::traits::AstarPather;

/// Which priority orders the open set.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// A*: `f = g + h` with the Manhattan heuristic.
    #[default]
    BestFirst,
    /// `f = g`; the heuristic is computed but ignored.
    UniformCost,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BestFirst, Strategy::UniformCost];

    /// Open-set priority of a node with cost `g` and estimate `h`.
    #[inline]
    pub fn priority(self, g: i32, h: i32) -> i32 {
        match self {
            Strategy::BestFirst => g + h,
            Strategy::UniformCost => g,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BestFirst => f.write_str("A*"),
            Strategy::UniformCost => f.write_str("uniform cost"),
        }
    }
}

/// How a newly generated node is checked against cells already seen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Revisit {
    /// A cell enters the open set only the first time it is generated.
    /// Later, cheaper routes to it are discarded.
    Never,
    /// A cell is (re)inserted whenever its new priority is strictly lower
    /// than that of its open entry and its closed entry. The superseded open
    /// entry is skipped when popped.
    #[default]
    IfBetter,
}

/// Search parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy: Strategy,
    pub revisit: Revisit,
}

impl SearchConfig {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    pub fn with_revisit(mut self, revisit: Revisit) -> Self {
        self.revisit = revisit;
        self
    }
}

/// A planned route: the moves from the start (exclusive) to the goal
/// (inclusive). Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Point>,
}

impl Path {
    /// The cell the head should move to this tick. This is the goal itself
    /// when the goal is adjacent to the start.
    #[inline]
    pub fn next_step(&self) -> Point {
        self.steps[0]
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    /// Number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn steps(&self) -> &[Point] {
        &self.steps
    }
}

/// A successful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPlan {
    pub path: Path,
    pub stats: SearchStats,
}

/// Runs searches. Owns the node arena and open/closed sets of a run.
///
/// Every call to [`find_path`](Self::find_path) starts from empty
/// collections; only their allocations are reused between calls, so a run
/// is a pure function of its inputs.
#[derive(Debug, Default)]
pub struct Pathfinder {
    config: SearchConfig,
    nodes: NodeArena,
    open: OpenSet,
    closed: ClosedSet,
    // scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl Pathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: NodeArena::default(),
            open: OpenSet::default(),
            closed: ClosedSet::default(),
            nbuf: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    /// Search from `start` to `goal`.
    ///
    /// The search stops as soon as the goal is generated as a neighbor, so
    /// the node it was generated from is not counted as expanded. `start`
    /// must differ from `goal`.
    pub fn find_path<P: AstarPather>(
        &mut self,
        pather: &P,
        start: Point,
        goal: Point,
    ) -> Result<PathPlan, NoPathFound> {
        debug_assert_ne!(start, goal, "search start and goal coincide");
        let t0 = Instant::now();
        let strategy = self.config.strategy;

        self.nodes.clear();
        self.open.clear();
        self.closed.clear();

        let h = pather.estimate(start, goal);
        let root = self.nodes.push(SearchNode {
            cell: start,
            g: 0,
            h,
            f: strategy.priority(0, h),
            previous: None,
        });
        self.open.push(start, self.nodes.get(root).f, root);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let reached = 'search: loop {
            let Some(qid) = self.open.pop() else {
                break 'search None;
            };
            let q = *self.nodes.get(qid);
            log::trace!(
                "expand {} g={} f={} ({} open)",
                q.cell,
                q.g,
                q.f,
                self.open.len()
            );

            nbuf.clear();
            pather.neighbors(q.cell, &mut nbuf);

            for &n in nbuf.iter() {
                if n == goal {
                    break 'search Some(qid);
                }
                let g = q.g + 1;
                let h = pather.estimate(n, goal);
                let f = strategy.priority(g, h);
                if !self.admits(n, f) {
                    continue;
                }
                let id = self.nodes.push(SearchNode {
                    cell: n,
                    g,
                    h,
                    f,
                    previous: Some(qid),
                });
                self.open.push(n, f, id);
            }

            self.closed.close(q.cell, q.f);
        };

        self.nbuf = nbuf;

        let mut stats = SearchStats {
            strategy,
            expanded: self.closed.len(),
            elapsed: t0.elapsed(),
            path_len: 0,
        };

        let Some(last) = reached else {
            log::debug!(
                "{strategy}: no path {start} -> {goal} ({} expanded, {:?})",
                stats.expanded,
                stats.elapsed
            );
            return Err(NoPathFound { stats });
        };

        let path = self.reconstruct(last, goal);
        stats.path_len = path.len();
        log::debug!(
            "{strategy}: {start} -> {goal} in {} moves ({} expanded, {:?})",
            stats.path_len,
            stats.expanded,
            stats.elapsed
        );
        Ok(PathPlan { path, stats })
    }

    /// Whether a node for `cell` at priority `f` should enter the open set.
    fn admits(&self, cell: Point, f: i32) -> bool {
        match self.config.revisit {
            Revisit::Never => !self.open.contains(cell) && !self.closed.contains(cell),
            Revisit::IfBetter => {
                self.open.f_of(cell).is_none_or(|known| f < known)
                    && self.closed.f_of(cell).is_none_or(|known| f < known)
            }
        }
    }

    fn reconstruct(&self, last: NodeId, goal: Point) -> Path {
        let mut steps = self.nodes.trace(last);
        steps.push(goal);
        Path { steps }
    }
}

/// One-shot search from `start` to `goal` on `field`, avoiding `obstacles`.
pub fn find_path(
    start: Point,
    goal: Point,
    field: &Playfield,
    obstacles: &ObstacleSet,
    strategy: Strategy,
) -> Result<PathPlan, NoPathFound> {
    Pathfinder::new(SearchConfig::new(strategy)).find_path(
        &FieldView::new(field, obstacles),
        start,
        goal,
    )
}
