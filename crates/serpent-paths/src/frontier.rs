//! Open and closed sets of one search run.
//!
//! The open set is a min-heap keyed by `(f, insertion_order)`: lower `f` is
//! popped first and ties go to the node inserted first. Each cell has at most
//! one live open entry; entries superseded by a cheaper duplicate stay in the
//! heap and are skipped when popped.

use std::cmp::Reverse;
use std::collections::hash_map::Entry as MapEntry;
use std::collections::{BinaryHeap, HashMap};

use serpent_core::Point;

use crate::node::NodeId;

#[derive(Debug)]
struct OpenEntry {
    f: i32,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
    cell: Point,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.f.cmp(&other.f).then_with(|| self.seq.cmp(&other.seq))
    }
}

#[derive(Copy, Clone, Debug)]
struct Live {
    f: i32,
    seq: u64,
}

#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<Reverse<OpenEntry>>,
    live: HashMap<Point, Live>,
    seq: u64,
}

impl OpenSet {
    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.live.clear();
        self.seq = 0;
    }

    /// Insert `node` for `cell`, superseding any live entry of that cell.
    pub(crate) fn push(&mut self, cell: Point, f: i32, node: NodeId) {
        let seq = self.seq;
        self.seq += 1;
        self.live.insert(cell, Live { f, seq });
        self.heap.push(Reverse(OpenEntry { f, seq, cell, node }));
    }

    /// Remove and return the live node with minimum `f`.
    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            match self.live.entry(entry.cell) {
                MapEntry::Occupied(slot) if slot.get().seq == entry.seq => {
                    slot.remove();
                    return Some(entry.node);
                }
                // Stale: superseded by a later insertion of the same cell.
                _ => continue,
            }
        }
        None
    }

    /// Priority of the live entry for `cell`, if any.
    #[inline]
    pub(crate) fn f_of(&self, cell: Point) -> Option<i32> {
        self.live.get(&cell).map(|l| l.f)
    }

    #[inline]
    pub(crate) fn contains(&self, cell: Point) -> bool {
        self.live.contains_key(&cell)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live.len()
    }
}

/// Cells that have been fully expanded, with the best `f` they were
/// expanded at.
#[derive(Debug, Default)]
pub(crate) struct ClosedSet {
    cells: HashMap<Point, i32>,
}

impl ClosedSet {
    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }

    /// Record `cell` as expanded. A cell is counted once; re-expanding it at
    /// a lower `f` only lowers the recorded priority.
    pub(crate) fn close(&mut self, cell: Point, f: i32) {
        match self.cells.entry(cell) {
            MapEntry::Occupied(mut slot) => {
                if f < *slot.get() {
                    slot.insert(f);
                }
            }
            MapEntry::Vacant(slot) => {
                slot.insert(f);
            }
        }
    }

    #[inline]
    pub(crate) fn f_of(&self, cell: Point) -> Option<i32> {
        self.cells.get(&cell).copied()
    }

    #[inline]
    pub(crate) fn contains(&self, cell: Point) -> bool {
        self.cells.contains_key(&cell)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }
}
