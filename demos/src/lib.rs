//! Shared driver for the headless demos.
//!
//! Runs an autopilot game to completion (or a tick limit), collecting one
//! [`Meal`] per food eaten, and renders the final board as text. Library
//! diagnostics (new expansion maxima, cause of death) arrive through `log`;
//! call [`init_logger`] first to see them.

use std::time::Duration;

use rand::Rng;
use serpent_core::Point;
use serpent_game::{Game, GameConfig, Status};
use serpent_paths::{Move, SearchStats};

/// Install the `env_logger` backend, filtered at `info` unless `RUST_LOG`
/// says otherwise. Returns `false` if a logger was already installed.
pub fn init_logger() -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_ok()
}

/// Configuration used by the demos: the stock playfield with the autopilot
/// engaged and the uniform-cost comparison on.
pub fn demo_config() -> GameConfig {
    let mut config = GameConfig {
        autopilot_enabled: true,
        ..Default::default()
    };
    config.autopilot.compare_uniform_cost = true;
    config
}

/// One food eaten by the autopilot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    pub tick: u64,
    pub score: u32,
    pub length: usize,
    /// Search that drove the move onto the food.
    pub primary: SearchStats,
    pub comparison: Option<SearchStats>,
}

/// Outcome of a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub ticks: u64,
    pub score: u32,
    pub length: usize,
    pub status: Status,
    /// Ticks on which the food was unreachable.
    pub fallbacks: u64,
    /// How long the run would last at the configured tick rate.
    pub play_time: Duration,
    pub meals: Vec<Meal>,
}

impl Summary {
    /// Total search time across both strategies.
    pub fn search_time(&self) -> Duration {
        self.meals
            .iter()
            .flat_map(|m| std::iter::once(m.primary).chain(m.comparison))
            .map(|s| s.elapsed)
            .sum()
    }
}

/// Play `game` until it ends or `max_ticks` ticks have run. `on_meal` sees
/// every food as it is eaten.
pub fn run<R: Rng>(
    game: &mut Game<R>,
    max_ticks: u64,
    mut on_meal: impl FnMut(&Meal),
) -> Summary {
    let mut meals = Vec::new();
    let mut fallbacks = 0;
    while game.status() == Status::Running && game.ticks() < max_ticks {
        let report = game.tick();
        let Some(plan) = report.plan else {
            continue;
        };
        if plan.kind == Move::Fallback {
            fallbacks += 1;
        }
        if report.ate {
            let meal = Meal {
                tick: game.ticks(),
                score: game.score(),
                length: game.snake().len(),
                primary: plan.primary,
                comparison: plan.comparison,
            };
            on_meal(&meal);
            meals.push(meal);
        }
    }
    let play_time = match game.config().ticks_per_second {
        0 => Duration::ZERO,
        tps => Duration::from_secs_f64(game.ticks() as f64 / f64::from(tps)),
    };
    log::debug!("run ended after {} ticks: {:?}", game.ticks(), game.status());
    Summary {
        ticks: game.ticks(),
        score: game.score(),
        length: game.snake().len(),
        status: game.status(),
        fallbacks,
        play_time,
        meals,
    }
}

/// Draw the board, one character per cell: `@` head, `o` body, `*` food.
pub fn render<R: Rng>(game: &Game<R>) -> String {
    let field = game.field();
    let step = field.step();
    let mut out = String::with_capacity(((field.cols() + 1) * field.rows()) as usize);
    for row in 0..field.rows() {
        for col in 0..field.cols() {
            let cell = Point::new(col, row) * step;
            let c = if cell == game.snake().head() {
                '@'
            } else if game.snake().contains(cell) {
                'o'
            } else if cell == game.food() && game.status() != Status::Won {
                '*'
            } else {
                '.'
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}
