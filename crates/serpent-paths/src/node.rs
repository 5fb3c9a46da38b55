use serpent_core::Point;

/// Index of a [`SearchNode`] in the arena of one search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A cell annotated with search metadata.
///
/// `previous` links to the predecessor on the best-known path when the node
/// was created. It is only meaningful inside the run that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub cell: Point,
    /// Steps taken from the start.
    pub g: i32,
    /// Heuristic estimate of the remaining steps.
    pub h: i32,
    /// Open-set priority.
    pub f: i32,
    pub previous: Option<NodeId>,
}

/// Owns every node created during one search.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    pub(crate) fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    /// Cells from the root (exclusive) to `id` (inclusive).
    pub(crate) fn trace(&self, id: NodeId) -> Vec<Point> {
        let mut cells = Vec::new();
        let mut cur = self.get(id);
        while let Some(prev) = cur.previous {
            cells.push(cur.cell);
            cur = self.get(prev);
        }
        cells.reverse();
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: i32, g: i32, previous: Option<NodeId>) -> SearchNode {
        SearchNode {
            cell: Point::new(x, 0),
            g,
            h: 0,
            f: g,
            previous,
        }
    }

    #[test]
    fn trace_excludes_root() {
        let mut arena = NodeArena::default();
        let root = arena.push(node(0, 0, None));
        let a = arena.push(node(1, 1, Some(root)));
        let b = arena.push(node(2, 2, Some(a)));
        assert_eq!(arena.trace(b), vec![Point::new(1, 0), Point::new(2, 0)]);
        assert!(arena.trace(root).is_empty());
    }

    #[test]
    fn clear_resets_ids() {
        let mut arena = NodeArena::default();
        arena.push(node(0, 0, None));
        arena.clear();
        assert_eq!(arena.push(node(3, 0, None)), NodeId(0));
        assert_eq!(arena.get(NodeId(0)).cell, Point::new(3, 0));
    }
}
