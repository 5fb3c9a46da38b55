use rand::{Rng, RngExt};
use serpent_core::{Playfield, Point};

use crate::neighbors::FieldView;
use crate::obstacles::ObstacleSet;
use crate::traits::Pather;

/// Pick one of the passable neighbors of `head` uniformly at random.
///
/// Returns `None` when every neighbor is blocked.
pub fn pick_random_neighbor<P: Pather>(
    pather: &P,
    head: Point,
    rng: &mut impl Rng,
) -> Option<Point> {
    let mut buf = Vec::with_capacity(4);
    pather.neighbors(head, &mut buf);
    if buf.is_empty() {
        return None;
    }
    Some(buf[rng.random_range(0..buf.len())])
}

/// Survival move used when no path to the food exists: a random safe cell
/// next to `head`, or `None` if the snake is boxed in.
pub fn pick_fallback(
    head: Point,
    field: &Playfield,
    obstacles: &ObstacleSet,
    rng: &mut impl Rng,
) -> Option<Point> {
    pick_random_neighbor(&FieldView::new(field, obstacles), head, rng)
}
