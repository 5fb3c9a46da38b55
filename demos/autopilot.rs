//! Headless autopilot demo: A* drives, uniform cost runs alongside for
//! comparison.
//!
//! Run: cargo run --bin autopilot -- [seed] [max_ticks]

use rand::SeedableRng;
use rand::rngs::StdRng;
use serpent_demos::{demo_config, init_logger, render, run};
use serpent_game::{Game, Status};

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        None => default,
        Some(s) => match s.parse() {
            Ok(v) => v,
            Err(_) => {
                eprintln!("Error: invalid {name}: {s}");
                eprintln!("usage: autopilot [seed] [max_ticks]");
                std::process::exit(2);
            }
        },
    }
}

fn main() {
    init_logger();
    let mut args = std::env::args().skip(1);
    let seed: u64 = parse_arg(args.next(), "seed", 0);
    let max_ticks: u64 = parse_arg(args.next(), "max_ticks", 20_000);

    let mut game = match Game::new(demo_config(), StdRng::seed_from_u64(seed)) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let summary = run(&mut game, max_ticks, |meal| {
        let uc = meal
            .comparison
            .map(|s| format!(", {}: {} ({:?})", s.strategy, s.expanded, s.elapsed))
            .unwrap_or_default();
        println!(
            "tick {:>6}  score {:>5}  length {:>4}  {}: {} ({:?}){uc}",
            meal.tick,
            meal.score,
            meal.length,
            meal.primary.strategy,
            meal.primary.expanded,
            meal.primary.elapsed,
        );
    });

    print!("{}", render(&game));
    let outcome = match summary.status {
        Status::Running => "tick limit reached".to_string(),
        Status::Lost(cause) => format!("lost: {cause}"),
        Status::Won => "won".to_string(),
    };
    println!(
        "{outcome} after {} ticks ({:.1?} at {} ticks/s); score {}, length {}, {} fallback moves, {:?} searching",
        summary.ticks,
        summary.play_time,
        game.config().ticks_per_second,
        summary.score,
        summary.length,
        summary.fallbacks,
        summary.search_time(),
    );
    let tracker = game.autopilot().tracker();
    for strategy in serpent_paths::Strategy::ALL {
        println!(
            "max expanded ({strategy}): {}",
            tracker.max_expanded(strategy)
        );
    }
}
