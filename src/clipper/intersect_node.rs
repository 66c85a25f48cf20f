use crate::clipper::enums::BundleState;
use crate::clipper::constants::ABOVE;
use crate::clipper::t_edge::EdgeTable;
use crate::geometry::point::Point;
use crate::utils::number::Number;

/// Crossing of two bundle heads inside one scanbeam. `point.y` is relative to
/// the bottom of the beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectNode<T: Number> {
    pub edge1: usize,
    pub edge2: usize,
    pub point: Point<T>,
}

/// Intersections of the current beam sorted by ascending y.
pub struct IntersectTable<T: Number> {
    nodes: Vec<IntersectNode<T>>,
    sorted_edges: Vec<usize>,
}

impl<T: Number> IntersectTable<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            sorted_edges: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[IntersectNode<T>] {
        &self.nodes
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.sorted_edges.clear();
    }

    /// Sweeps the active edges of a beam of height `dy` left to right and
    /// records every pair whose order at the top of the beam is reversed.
    pub fn build(&mut self, edges: &EdgeTable<T>, dy: T, epsilon: T) {
        self.clear();

        for index in edges.active_edges() {
            let edge = edges.get(index);

            if edge.bstate[ABOVE] == BundleState::BundleHead || edge.has_bundle_above() {
                self.add_sorted_edge(index, edges, dy, epsilon);
            }
        }
    }

    // `sorted_edges` is ordered by xt, rightmost last.
    fn add_sorted_edge(&mut self, index: usize, edges: &EdgeTable<T>, dy: T, epsilon: T) {
        let edge = edges.get(index);
        let mut position = self.sorted_edges.len();

        while position > 0 {
            let sorted_index = self.sorted_edges[position - 1];
            let sorted = edges.get(sorted_index);
            let den = (sorted.xt - sorted.xb) - (edge.xt - edge.xb);

            if edge.xt >= sorted.xt || edge.dx == sorted.dx || den.abs() <= epsilon {
                break;
            }

            let r = (edge.xb - sorted.xb) / den;
            let x = sorted.xb + r * (sorted.xt - sorted.xb);

            self.add_intersection(sorted_index, index, Point::new(x, r * dy));
            position -= 1;
        }

        self.sorted_edges.insert(position, index);
    }

    fn add_intersection(&mut self, edge1: usize, edge2: usize, point: Point<T>) {
        let position = self
            .nodes
            .iter()
            .position(|node| node.point.y > point.y)
            .unwrap_or(self.nodes.len());

        self.nodes.insert(
            position,
            IntersectNode {
                edge1,
                edge2,
                point,
            },
        );
    }
}

impl<T: Number> Default for IntersectTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
