use serpent_core::{Direction, Playfield, Point};

use crate::distance::manhattan;
use crate::obstacles::ObstacleSet;
use crate::traits::{AstarPather, Pather};

/// A playfield seen through one obstacle snapshot.
///
/// This is the pather every search and fallback move runs against: a
/// neighbor is passable iff it is in bounds and not occupied.
#[derive(Clone, Copy, Debug)]
pub struct FieldView<'a> {
    field: &'a Playfield,
    obstacles: &'a ObstacleSet,
}

impl<'a> FieldView<'a> {
    pub fn new(field: &'a Playfield, obstacles: &'a ObstacleSet) -> Self {
        Self { field, obstacles }
    }

    /// Whether the snake head could occupy `cell`.
    #[inline]
    pub fn is_free(&self, cell: Point) -> bool {
        self.field.in_bounds(cell) && !self.obstacles.contains(cell)
    }
}

impl Pather for FieldView<'_> {
    /// Candidates are generated left, right, top, bottom. Equal-priority
    /// nodes are expanded in this order, so it must not change.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for dir in Direction::ALL {
            let n = self.field.neighbor(p, dir);
            if self.is_free(n) {
                buf.push(n);
            }
        }
    }
}

impl AstarPather for FieldView<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to) / self.field.step()
    }
}

/// The in-bounds, unoccupied cells adjacent to `cell`, in generation order.
pub fn neighbors(cell: Point, field: &Playfield, obstacles: &ObstacleSet) -> Vec<Point> {
    let mut buf = Vec::with_capacity(4);
    FieldView::new(field, obstacles).neighbors(cell, &mut buf);
    buf
}
