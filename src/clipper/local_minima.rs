use crate::clipper::constants::UNASSIGNED;
use crate::clipper::t_edge::EdgeTable;
use crate::utils::number::Number;

#[derive(Debug, Clone, Copy)]
pub struct LocalMinima<T: Number> {
    pub y: T,
    /// Head of the bound list, chained through `TEdge::next_bound`.
    pub first_bound: usize,
}

/// Local minima sorted by ascending y.
pub struct LocalMinimaTable<T: Number> {
    nodes: Vec<LocalMinima<T>>,
}

impl<T: Number> LocalMinimaTable<T> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn get(&self, index: usize) -> Option<&LocalMinima<T>> {
        self.nodes.get(index)
    }

    /// Adds the bound starting with `edge` to the node at `y`, creating the
    /// node if needed. Bounds inside a node are ordered by `(xb, dx)`, a new
    /// bound going after equal ones.
    pub fn insert_bound(&mut self, y: T, edge: usize, edges: &mut EdgeTable<T>) {
        if edge == UNASSIGNED {
            return;
        }

        let node_index = self.node_at(y);
        let mut prev = UNASSIGNED;
        let mut current = self.nodes[node_index].first_bound;

        while current != UNASSIGNED {
            let new_edge = edges.get(edge);
            let bound = edges.get(current);

            if new_edge.xb < bound.xb || (new_edge.xb == bound.xb && new_edge.dx < bound.dx) {
                break;
            }

            prev = current;
            current = bound.next_bound;
        }

        edges.get_mut(edge).next_bound = current;

        if prev == UNASSIGNED {
            self.nodes[node_index].first_bound = edge;
        } else {
            edges.get_mut(prev).next_bound = edge;
        }
    }

    /// Bound heads of one node in list order.
    pub fn bounds(&self, index: usize, edges: &EdgeTable<T>) -> Vec<usize> {
        let mut result = Vec::new();
        let mut current = match self.nodes.get(index) {
            Some(node) => node.first_bound,
            None => UNASSIGNED,
        };

        while current != UNASSIGNED {
            result.push(current);
            current = edges.get(current).next_bound;
        }

        result
    }

    fn node_at(&mut self, y: T) -> usize {
        let index = self.nodes.partition_point(|node| node.y < y);

        if self.nodes.get(index).map_or(true, |node| node.y != y) {
            self.nodes.insert(
                index,
                LocalMinima {
                    y,
                    first_bound: UNASSIGNED,
                },
            );
        }

        index
    }
}

impl<T: Number> Default for LocalMinimaTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
