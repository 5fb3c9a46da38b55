use std::collections::HashSet;

use serpent_core::Point;

/// The cells currently occupied by the snake body.
///
/// Built once per tick from the body and read-only while a search runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleSet {
    cells: HashSet<Point>,
}

impl ObstacleSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the cells of a snake body (head first; order is not kept).
    pub fn from_body<I>(body: I) -> Self
    where
        I: IntoIterator<Item = Point>,
    {
        body.into_iter().collect()
    }

    #[inline]
    pub fn contains(&self, cell: Point) -> bool {
        self.cells.contains(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<Point> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_body_deduplicates() {
        let body = [Point::new(2, 2), Point::new(1, 2), Point::new(2, 2)];
        let set = ObstacleSet::from_body(body);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Point::new(1, 2)));
        assert!(!set.contains(Point::new(0, 2)));
    }

    #[test]
    fn empty_snapshot() {
        let set = ObstacleSet::new();
        assert!(set.is_empty());
        assert!(!set.contains(Point::ZERO));
    }
}
