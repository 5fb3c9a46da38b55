//! The step-aligned playfield.

use crate::dir::Direction;
use crate::geom::{Point, Range};

/// A bounded playfield whose cells are aligned to a fixed step.
///
/// A cell `(x, y)` is in bounds when `0 <= x <= width - step` and
/// `0 <= y <= height - step`. With `step == 1` this is an ordinary
/// `width × height` grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playfield {
    width: i32,
    height: i32,
    step: i32,
}

impl Playfield {
    /// Create a playfield of `width × height` units with cells `step` units wide.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive or the playfield cannot hold a
    /// single cell.
    pub fn new(width: i32, height: i32, step: i32) -> Self {
        assert!(step > 0, "playfield step must be positive, got {step}");
        assert!(
            width >= step && height >= step,
            "playfield {width}x{height} cannot hold a cell of size {step}"
        );
        Self {
            width,
            height,
            step,
        }
    }

    /// A plain grid of `cols × rows` cells with unit step.
    pub fn grid(cols: i32, rows: i32) -> Self {
        Self::new(cols, rows, 1)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Size of one cell (the distance between adjacent cells).
    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    /// Number of cell columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.width / self.step
    }

    /// Number of cell rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.height / self.step
    }

    /// The range of valid coordinates, in playfield units.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(
            0,
            0,
            self.width - self.step + 1,
            self.height - self.step + 1,
        )
    }

    /// Whether `cell` lies inside the playfield.
    #[inline]
    pub fn in_bounds(&self, cell: Point) -> bool {
        self.bounds().contains(cell)
    }

    /// Whether `cell` sits on the step lattice.
    #[inline]
    pub fn is_aligned(&self, cell: Point) -> bool {
        cell.x % self.step == 0 && cell.y % self.step == 0
    }

    /// The adjacent cell one step away in direction `dir` (may be out of bounds).
    #[inline]
    pub fn neighbor(&self, cell: Point, dir: Direction) -> Point {
        cell + dir.delta() * self.step
    }

    /// Row-major iterator over every aligned in-bounds cell.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        Range::new(0, 0, self.cols(), self.rows())
            .iter()
            .map(move |p| p * self.step)
    }

    /// Total number of aligned cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        Range::new(0, 0, self.cols(), self.rows()).len()
    }

    /// Manhattan distance between two cells, measured in steps.
    #[inline]
    pub fn distance_in_steps(&self, a: Point, b: Point) -> i32 {
        ((a.x - b.x).abs() + (a.y - b.y).abs()) / self.step
    }
}
