//! One tick of autonomous play: plan toward the food, or survive.

use rand::Rng;
use serpent_core::{Playfield, Point};

use crate::error::NoSafeMove;
use crate::fallback::pick_random_neighbor;
use crate::metrics::{ExpansionTracker, SearchStats};
use crate::neighbors::FieldView;
use crate::obstacles::ObstacleSet;
use crate::search::{Path, Pathfinder, Revisit, SearchConfig, Strategy};

/// Autopilot parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutopilotConfig {
    /// Strategy whose path the snake follows.
    pub strategy: Strategy,
    /// Also run a uniform-cost search each tick, for comparison only.
    pub compare_uniform_cost: bool,
    pub revisit: Revisit,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BestFirst,
            compare_uniform_cost: false,
            revisit: Revisit::default(),
        }
    }
}

/// How the next head cell was chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
    /// First step of a path to the food.
    Planned(Path),
    /// No path existed; a random safe neighbor.
    Fallback,
}

/// Outcome of one planning tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanReport {
    /// Where the head goes next.
    pub next: Point,
    pub kind: Move,
    /// Statistics of the search that drove the decision.
    pub primary: SearchStats,
    /// Statistics of the uniform-cost comparison run, when enabled.
    pub comparison: Option<SearchStats>,
    /// Whether this tick set a new expansion maximum for either strategy.
    pub new_maximum: bool,
}

/// Plans the snake's moves. Holds one [`Pathfinder`] per strategy run so
/// each tick's searches stay independent.
#[derive(Debug)]
pub struct Autopilot {
    config: AutopilotConfig,
    primary: Pathfinder,
    comparison: Pathfinder,
    tracker: ExpansionTracker,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(AutopilotConfig::default())
    }
}

impl Autopilot {
    pub fn new(config: AutopilotConfig) -> Self {
        Self {
            config,
            primary: Pathfinder::new(
                SearchConfig::new(config.strategy).with_revisit(config.revisit),
            ),
            comparison: Pathfinder::new(
                SearchConfig::new(Strategy::UniformCost).with_revisit(config.revisit),
            ),
            tracker: ExpansionTracker::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> AutopilotConfig {
        self.config
    }

    pub fn set_compare_uniform_cost(&mut self, enabled: bool) {
        self.config.compare_uniform_cost = enabled;
    }

    /// Per-strategy expansion maxima seen so far.
    #[inline]
    pub fn tracker(&self) -> &ExpansionTracker {
        &self.tracker
    }

    pub fn reset_tracker(&mut self) {
        self.tracker.reset();
    }

    /// Choose the next head cell.
    ///
    /// `body` is the obstacle snapshot for this tick and normally contains
    /// the head itself. When the food is unreachable a random safe neighbor
    /// is chosen; when there is none the snake is trapped and
    /// [`NoSafeMove`] is returned.
    pub fn plan(
        &mut self,
        field: &Playfield,
        head: Point,
        body: &ObstacleSet,
        food: Point,
        rng: &mut impl Rng,
    ) -> Result<PlanReport, NoSafeMove> {
        let view = FieldView::new(field, body);

        let comparison = if self.config.compare_uniform_cost {
            let stats = match self.comparison.find_path(&view, head, food) {
                Ok(plan) => plan.stats,
                Err(e) => {
                    log::debug!("{e}");
                    e.stats
                }
            };
            Some(stats)
        } else {
            None
        };

        let (next, kind, primary) = match self.primary.find_path(&view, head, food) {
            Ok(plan) => (plan.path.next_step(), Move::Planned(plan.path), plan.stats),
            Err(e) => {
                let Some(next) = pick_random_neighbor(&view, head, rng) else {
                    log::debug!("{e}; head {head} is boxed in");
                    return Err(NoSafeMove { head });
                };
                log::debug!("{e}; wandering to {next}");
                (next, Move::Fallback, e.stats)
            }
        };

        let mut new_maximum = self.tracker.record(&primary);
        if let Some(stats) = &comparison {
            new_maximum |= self.tracker.record(stats);
        }
        if new_maximum {
            self.log_maximum(&primary, comparison.as_ref(), body.len());
        }

        Ok(PlanReport {
            next,
            kind,
            primary,
            comparison,
            new_maximum,
        })
    }

    fn log_maximum(
        &self,
        primary: &SearchStats,
        comparison: Option<&SearchStats>,
        snake_len: usize,
    ) {
        log::info!(
            "expanded nodes ({}): {} ({:?})",
            primary.strategy,
            self.tracker.max_expanded(primary.strategy),
            primary.elapsed
        );
        if let Some(c) = comparison {
            log::info!(
                "expanded nodes ({}): {} ({:?})",
                c.strategy,
                self.tracker.max_expanded(c.strategy),
                c.elapsed
            );
        }
        log::info!("snake length: {snake_len}");
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn follows_the_planned_path() {
        let field = Playfield::grid(10, 10);
        let body = ObstacleSet::from_body([pt(0, 0)]);
        let mut ap = Autopilot::default();
        let mut rng = StdRng::seed_from_u64(0);
        let report = ap.plan(&field, pt(0, 0), &body, pt(3, 0), &mut rng).unwrap();
        assert_eq!(report.next, pt(1, 0));
        assert!(matches!(report.kind, Move::Planned(ref p) if p.len() == 3));
        assert_eq!(report.comparison, None);
        assert!(report.new_maximum);
    }

    #[test]
    fn comparison_run_is_reported() {
        let field = Playfield::grid(10, 10);
        let body = ObstacleSet::from_body([pt(0, 0)]);
        let mut ap = Autopilot::new(AutopilotConfig {
            compare_uniform_cost: true,
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(0);
        let report = ap.plan(&field, pt(0, 0), &body, pt(6, 6), &mut rng).unwrap();
        let uc = report.comparison.unwrap();
        assert_eq!(uc.strategy, Strategy::UniformCost);
        assert_eq!(uc.path_len, report.primary.path_len);
        assert!(uc.expanded >= report.primary.expanded);
        assert_eq!(ap.tracker().max_expanded(Strategy::UniformCost), uc.expanded);
    }

    #[test]
    fn unreachable_food_falls_back() {
        // Food sealed off in the corner by the body; the head is free.
        let field = Playfield::grid(10, 10);
        let body = ObstacleSet::from_body([pt(5, 5), pt(8, 9), pt(8, 8), pt(9, 8)]);
        let mut ap = Autopilot::default();
        let mut rng = StdRng::seed_from_u64(5);
        let report = ap.plan(&field, pt(5, 5), &body, pt(9, 9), &mut rng).unwrap();
        assert_eq!(report.kind, Move::Fallback);
        assert_eq!(report.primary.path_len, 0);
        assert_eq!(field.distance_in_steps(pt(5, 5), report.next), 1);
        assert!(!body.contains(report.next));
    }

    #[test]
    fn trapped_head_reports_no_safe_move() {
        let field = Playfield::grid(10, 10);
        let body =
            ObstacleSet::from_body([pt(5, 5), pt(4, 5), pt(6, 5), pt(5, 4), pt(5, 6)]);
        let mut ap = Autopilot::default();
        let mut rng = StdRng::seed_from_u64(5);
        let err = ap.plan(&field, pt(5, 5), &body, pt(0, 0), &mut rng).unwrap_err();
        assert_eq!(err, NoSafeMove { head: pt(5, 5) });
        assert_eq!(err.to_string(), "no safe move from (5, 5)");
    }

    #[test]
    fn maximum_is_only_new_once() {
        let field = Playfield::grid(10, 10);
        let body = ObstacleSet::from_body([pt(0, 0)]);
        let mut ap = Autopilot::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(ap.plan(&field, pt(0, 0), &body, pt(5, 5), &mut rng).unwrap().new_maximum);
        assert!(!ap.plan(&field, pt(0, 0), &body, pt(5, 5), &mut rng).unwrap().new_maximum);
        ap.reset_tracker();
        assert_eq!(ap.tracker().max_expanded(Strategy::BestFirst), 0);
    }
}
