use std::collections::VecDeque;

use serpent_core::Point;

/// The snake body, head first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snake {
    body: VecDeque<Point>,
}

impl Snake {
    /// A one-segment snake.
    pub fn new(head: Point) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    #[inline]
    pub fn head(&self) -> Point {
        self.body[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake has at least its head.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Point) -> bool {
        self.body.contains(&cell)
    }

    /// Segments from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Whether moving the head onto `cell` would hit the body. The tail
    /// moves out of the way unless the snake is growing this tick.
    pub fn would_bite(&self, cell: Point, growing: bool) -> bool {
        let keep = if growing {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        self.body.iter().take(keep).any(|&p| p == cell)
    }

    /// Move the head onto `cell`, dropping the tail unless `grow`.
    pub fn advance(&mut self, cell: Point, grow: bool) {
        self.body.push_front(cell);
        if !grow {
            self.body.pop_back();
        }
    }
}
