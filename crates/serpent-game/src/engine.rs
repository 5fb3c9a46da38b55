//! The game loop: one cell per tick, collisions, food and score.

use std::fmt;

use rand::{Rng, RngExt};
use serpent_core::{Direction, Playfield, Point};
use serpent_paths::{Autopilot, ObstacleSet, PlanReport};

use crate::config::{ConfigError, GameConfig};
use crate::snake::Snake;

/// Why a game was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cause {
    /// The head left the playfield.
    Boundary,
    /// The head ran into the body.
    SelfCollision,
    /// The autopilot found no safe cell to move to.
    Trapped,
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cause::Boundary => f.write_str("boundary collision"),
            Cause::SelfCollision => f.write_str("self-collision"),
            Cause::Trapped => f.write_str("trapped"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Running,
    Lost(Cause),
    /// The snake fills the playfield.
    Won,
}

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Head position after the tick.
    pub head: Point,
    pub moved: bool,
    pub ate: bool,
    /// Autopilot decision, when it drove this tick.
    pub plan: Option<PlanReport>,
    pub status: Status,
}

/// A snake game in progress.
pub struct Game<R: Rng> {
    config: GameConfig,
    field: Playfield,
    snake: Snake,
    /// Manual steering; `None` until the player picks a direction.
    heading: Option<Direction>,
    /// Direction of the last step actually taken.
    last_move: Option<Direction>,
    food: Point,
    score: u32,
    status: Status,
    ticks: u64,
    autopilot_enabled: bool,
    autopilot: Autopilot,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Validate `config` and start a new game.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        let field = config.validate()?;
        let mut game = Self {
            snake: Snake::new(config.initial_head),
            heading: None,
            last_move: None,
            food: config.initial_head,
            score: 0,
            status: Status::Running,
            ticks: 0,
            autopilot_enabled: config.autopilot_enabled,
            autopilot: Autopilot::new(config.autopilot),
            field,
            config,
            rng,
        };
        game.respawn_food();
        Ok(game)
    }

    /// Start over with a one-segment snake. The autopilot setting and the
    /// expansion maxima are kept.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.config.initial_head);
        self.heading = None;
        self.last_move = None;
        self.score = 0;
        self.status = Status::Running;
        self.ticks = 0;
        self.respawn_food();
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn field(&self) -> &Playfield {
        &self.field
    }

    #[inline]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[inline]
    pub fn food(&self) -> Point {
        self.food
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    #[inline]
    pub fn is_autopilot(&self) -> bool {
        self.autopilot_enabled
    }

    #[inline]
    pub fn autopilot(&self) -> &Autopilot {
        &self.autopilot
    }

    // -------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------

    /// Set the manual heading. Ignored while the autopilot drives or the
    /// game is over; a 180° turn is refused once the snake has a body.
    ///
    /// Returns whether the heading was accepted.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if self.autopilot_enabled || self.status != Status::Running {
            return false;
        }
        if self.snake.len() > 1 && self.last_move.is_some_and(|m| m.is_opposite(dir)) {
            return false;
        }
        self.heading = Some(dir);
        true
    }

    /// Engage or release the autopilot. Either way the manual heading is
    /// cleared, so the snake stops until steered again. Returns the new
    /// state.
    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot_enabled = !self.autopilot_enabled;
        self.heading = None;
        self.autopilot_enabled
    }

    /// Run the uniform-cost comparison search alongside A* each tick.
    pub fn set_compare_uniform_cost(&mut self, enabled: bool) {
        self.autopilot.set_compare_uniform_cost(enabled);
    }

    /// Move the food to `cell`. The caller guarantees it is a free
    /// playfield cell.
    pub fn set_food(&mut self, cell: Point) {
        debug_assert!(self.field.in_bounds(cell) && !self.snake.contains(cell));
        self.food = cell;
    }

    // -------------------------------------------------------------------
    // Tick
    // -------------------------------------------------------------------

    /// Advance the game by one cell.
    pub fn tick(&mut self) -> TickReport {
        if self.status != Status::Running {
            return self.report(false, false, None);
        }
        self.ticks += 1;
        let head = self.snake.head();

        let (target, plan) = if self.autopilot_enabled {
            let body = ObstacleSet::from_body(self.snake.iter());
            match self
                .autopilot
                .plan(&self.field, head, &body, self.food, &mut self.rng)
            {
                Ok(plan) => (plan.next, Some(plan)),
                Err(e) => {
                    log::debug!("{e}");
                    self.lose(Cause::Trapped);
                    return self.report(false, false, None);
                }
            }
        } else {
            match self.heading {
                Some(dir) => (self.field.neighbor(head, dir), None),
                None => return self.report(false, false, None),
            }
        };

        if !self.field.in_bounds(target) {
            self.lose(Cause::Boundary);
            return self.report(false, false, plan);
        }
        let ate = target == self.food;
        if self.snake.would_bite(target, ate) {
            self.lose(Cause::SelfCollision);
            return self.report(false, false, plan);
        }

        self.snake.advance(target, ate);
        self.last_move = Direction::between(head, target);
        if ate {
            self.score += self.config.food_score;
            self.respawn_food();
        }
        self.report(true, ate, plan)
    }

    fn report(&self, moved: bool, ate: bool, plan: Option<PlanReport>) -> TickReport {
        TickReport {
            head: self.snake.head(),
            moved,
            ate,
            plan,
            status: self.status,
        }
    }

    fn lose(&mut self, cause: Cause) {
        log::info!(
            "cause of death: {cause} (score {}, length {})",
            self.score,
            self.snake.len()
        );
        self.status = Status::Lost(cause);
    }

    /// Put the food on a random free cell, or end the game as won when
    /// there is none.
    fn respawn_food(&mut self) {
        let body = ObstacleSet::from_body(self.snake.iter());
        let free: Vec<Point> = self.field.cells().filter(|&c| !body.contains(c)).collect();
        if free.is_empty() {
            log::info!("playfield filled at score {}", self.score);
            self.status = Status::Won;
            return;
        }
        self.food = free[self.rng.random_range(0..free.len())];
        log::debug!("food at {}", self.food);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serpent_paths::{AutopilotConfig, Move, Strategy};

    use super::*;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn game(config: GameConfig) -> Game<StdRng> {
        Game::new(config, StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn new_game() {
        let g = game(GameConfig::default());
        assert_eq!(g.status(), Status::Running);
        assert_eq!(g.snake().len(), 1);
        assert_eq!(g.snake().head(), Point::ZERO);
        assert_eq!(g.score(), 0);
        assert!(g.field().in_bounds(g.food()));
        assert!(g.field().is_aligned(g.food()));
        assert_ne!(g.food(), g.snake().head());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            step: -1,
            ..Default::default()
        };
        assert!(Game::new(config, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn stands_still_without_heading() {
        let mut g = game(GameConfig::small());
        let r = g.tick();
        assert!(!r.moved);
        assert_eq!(r.head, pt(0, 0));
        assert_eq!(r.status, Status::Running);
    }

    #[test]
    fn manual_step_moves_one_cell() {
        let mut g = game(GameConfig::default());
        g.set_food(pt(570, 570));
        assert!(g.steer(Direction::Down));
        let r = g.tick();
        assert!(r.moved);
        assert_eq!(r.head, pt(0, 19));
        assert_eq!(g.snake().len(), 1);
    }

    #[test]
    fn leaving_the_field_loses() {
        let mut g = game(GameConfig::small());
        g.steer(Direction::Left);
        let r = g.tick();
        assert!(!r.moved);
        assert_eq!(r.status, Status::Lost(Cause::Boundary));
        assert!(!g.steer(Direction::Right));
        assert!(!g.tick().moved);
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut g = game(GameConfig::small());
        g.set_food(pt(1, 0));
        g.steer(Direction::Right);
        let r = g.tick();
        assert!(r.ate);
        assert_eq!(g.score(), 10);
        assert_eq!(g.snake().len(), 2);
        assert!(!g.snake().contains(g.food()));
        // Reversal is refused once there is a body.
        assert!(!g.steer(Direction::Left));
        assert!(g.steer(Direction::Down));
    }

    #[test]
    fn biting_the_body_loses() {
        let mut g = game(GameConfig::small());
        g.steer(Direction::Right);
        for x in 1..=4 {
            g.set_food(pt(x, 0));
            assert!(g.tick().ate);
        }
        g.set_food(pt(9, 9));
        // Body: (4,0) (3,0) (2,0) (1,0) (0,0)
        for dir in [Direction::Down, Direction::Left] {
            assert!(g.steer(dir));
            assert!(g.tick().moved);
        }
        assert!(g.steer(Direction::Up));
        let r = g.tick();
        assert_eq!(r.status, Status::Lost(Cause::SelfCollision));
        assert_eq!(r.head, pt(3, 1));
    }

    #[test]
    fn autopilot_walks_to_food() {
        let mut g = game(GameConfig::small());
        assert!(g.toggle_autopilot());
        assert!(!g.steer(Direction::Down));
        g.set_food(pt(3, 0));
        let heads: Vec<Point> = (0..3).map(|_| g.tick().head).collect();
        assert_eq!(heads, vec![pt(1, 0), pt(2, 0), pt(3, 0)]);
        assert_eq!(g.score(), 10);
        assert_eq!(g.snake().len(), 2);
    }

    #[test]
    fn autopilot_reports_comparison() {
        let mut g = game(GameConfig {
            autopilot_enabled: true,
            autopilot: AutopilotConfig {
                compare_uniform_cost: true,
                ..Default::default()
            },
            ..GameConfig::small()
        });
        g.set_food(pt(5, 5));
        let plan = g.tick().plan.unwrap();
        assert!(matches!(plan.kind, Move::Planned(_)));
        assert_eq!(plan.comparison.unwrap().strategy, Strategy::UniformCost);
    }

    #[test]
    fn filling_the_field_wins() {
        let mut g = game(GameConfig {
            autopilot_enabled: true,
            ..GameConfig::grid(2, 1)
        });
        assert_eq!(g.food(), pt(1, 0));
        let r = g.tick();
        assert!(r.ate);
        assert_eq!(r.status, Status::Won);
    }

    #[test]
    fn dead_end_traps_autopilot() {
        let mut g = game(GameConfig {
            autopilot_enabled: true,
            ..GameConfig::grid(3, 1)
        });
        g.set_food(pt(2, 0));
        assert_eq!(g.tick().head, pt(1, 0));
        assert!(g.tick().ate);
        // Only (0,0) is free, behind the body.
        assert_eq!(g.food(), pt(0, 0));
        let r = g.tick();
        assert_eq!(r.status, Status::Lost(Cause::Trapped));
        assert!(r.plan.is_none());
    }

    #[test]
    fn reset_starts_over() {
        let mut g = game(GameConfig::small());
        g.set_food(pt(1, 0));
        g.steer(Direction::Right);
        g.tick();
        g.steer(Direction::Up);
        g.tick();
        assert_eq!(g.status(), Status::Lost(Cause::Boundary));
        g.reset();
        assert_eq!(g.status(), Status::Running);
        assert_eq!(g.score(), 0);
        assert_eq!(g.snake().len(), 1);
        assert_eq!(g.heading(), None);
        assert_eq!(g.ticks(), 0);
    }

    #[test]
    fn reset_keeps_autopilot() {
        let mut g = game(GameConfig::grid(3, 1));
        g.toggle_autopilot();
        g.set_food(pt(2, 0));
        g.tick();
        g.tick();
        g.tick();
        assert_eq!(g.status(), Status::Lost(Cause::Trapped));
        g.reset();
        assert!(g.is_autopilot());
        assert_eq!(g.status(), Status::Running);
    }

    #[test]
    fn long_autopilot_run_keeps_invariants() {
        let mut g = game(GameConfig {
            autopilot_enabled: true,
            ..GameConfig::grid(12, 12)
        });
        g.set_compare_uniform_cost(true);
        for _ in 0..2000 {
            let r = g.tick();
            if r.status != Status::Running {
                break;
            }
            assert!(g.field().in_bounds(r.head));
            let cells: HashSet<Point> = g.snake().iter().collect();
            assert_eq!(cells.len(), g.snake().len());
            assert!(!g.snake().contains(g.food()));
            if let Some(plan) = &r.plan {
                if let (Move::Planned(path), Some(uc)) = (&plan.kind, &plan.comparison) {
                    assert_eq!(uc.path_len, path.len());
                }
            }
        }
        assert_eq!(g.score(), 10 * (g.snake().len() as u32 - 1));
        assert!(g.score() > 0);
        assert!(g.autopilot().tracker().max_expanded(Strategy::UniformCost) > 0);
    }
}
