use crate::clipper::constants::UNASSIGNED;
use crate::clipper::out_pt::OutPtPool;
use crate::geometry::contour::Contour;
use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;
use crate::utils::number::Number;

#[derive(Debug, Clone, Copy)]
struct PolygonNode {
    left: usize,
    right: usize,
    active: bool,
    proxy: usize,
    rank: u8,
}

/// Forest of partially built output contours.
///
/// Every node owns a vertex chain that grows at both ends. Merged nodes are
/// joined union-find style through `proxy`; only a root holds the chain of its
/// set, so every operation resolves its handle with [`OutRec::find`] first.
pub struct OutRec<T: Number> {
    nodes: Vec<PolygonNode>,
    points: OutPtPool<T>,
}

impl<T: Number> OutRec<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            points: OutPtPool::new(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.points.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Starts a new chain holding the single vertex `(x, y)`.
    pub fn add_local_min(&mut self, x: T, y: T) -> usize {
        let point_index = self.points.create(x, y);
        let index = self.nodes.len();

        self.nodes.push(PolygonNode {
            left: point_index,
            right: point_index,
            active: true,
            proxy: index,
            rank: 0,
        });

        index
    }

    pub fn add_left(&mut self, node: usize, x: T, y: T) {
        if node == UNASSIGNED {
            return;
        }

        let root = self.find(node);
        let point_index = self.points.create(x, y);

        self.points.set_next(point_index, self.nodes[root].left);
        self.nodes[root].left = point_index;
    }

    pub fn add_right(&mut self, node: usize, x: T, y: T) {
        if node == UNASSIGNED {
            return;
        }

        let root = self.find(node);
        let point_index = self.points.create(x, y);

        self.points.set_next(self.nodes[root].right, point_index);
        self.nodes[root].right = point_index;
    }

    /// Attaches the chain of `p` to the left end of the chain of `q`.
    pub fn merge_left(&mut self, p: usize, q: usize) {
        if p == UNASSIGNED || q == UNASSIGNED {
            return;
        }

        let p_root = self.find(p);
        let q_root = self.find(q);

        if p_root == q_root {
            return;
        }

        self.points
            .set_next(self.nodes[p_root].right, self.nodes[q_root].left);
        self.nodes[q_root].left = self.nodes[p_root].left;
        self.join(p_root, q_root);
    }

    /// Attaches the chain of `p` to the right end of the chain of `q`.
    pub fn merge_right(&mut self, p: usize, q: usize) {
        if p == UNASSIGNED || q == UNASSIGNED {
            return;
        }

        let p_root = self.find(p);
        let q_root = self.find(q);

        if p_root == q_root {
            return;
        }

        self.points
            .set_next(self.nodes[q_root].right, self.nodes[p_root].left);
        self.nodes[q_root].right = self.nodes[p_root].right;
        self.join(p_root, q_root);
    }

    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;

        while self.nodes[root].proxy != root {
            root = self.nodes[root].proxy;
        }

        let mut current = node;

        while current != root {
            let next = self.nodes[current].proxy;
            self.nodes[current].proxy = root;
            current = next;
        }

        root
    }

    #[cfg(test)]
    pub fn is_active(&self, node: usize) -> bool {
        node != UNASSIGNED && node < self.nodes.len() && self.nodes[node].active
    }

    /// Vertices of the chain `node` belongs to, left end first.
    #[cfg(test)]
    pub fn chain(&mut self, node: usize) -> Vec<Point<T>> {
        if node == UNASSIGNED {
            return Vec::new();
        }

        let root = self.find(node);

        self.points.chain(self.nodes[root].left).copied().collect()
    }

    /// Closes every live chain into a contour. Chains with fewer than three
    /// distinct vertices are dropped and deactivated.
    pub fn generate(&mut self) -> Polygon<T> {
        let mut result = Polygon::new();

        for index in 0..self.nodes.len() {
            let node = self.nodes[index];

            if !node.active || node.proxy != index {
                continue;
            }

            let mut points: Vec<Point<T>> = Vec::new();

            for point in self.points.chain(node.left) {
                if points.last() != Some(point) {
                    points.push(*point);
                }
            }

            while points.len() > 1 && points.first() == points.last() {
                points.pop();
            }

            if points.len() <= 2 {
                self.nodes[index].active = false;
                continue;
            }

            points.reverse();
            result.add_contour(Contour::new(points));
        }

        result
    }

    // `into` already holds the merged chain.
    fn join(&mut self, from: usize, into: usize) {
        if self.nodes[from].rank > self.nodes[into].rank {
            self.nodes[from].left = self.nodes[into].left;
            self.nodes[from].right = self.nodes[into].right;
            self.nodes[into].active = false;
            self.nodes[into].proxy = from;
        } else {
            if self.nodes[from].rank == self.nodes[into].rank {
                self.nodes[into].rank += 1;
            }

            self.nodes[from].active = false;
            self.nodes[from].proxy = into;
        }
    }
}

impl<T: Number> Default for OutRec<T> {
    fn default() -> Self {
        Self::new()
    }
}
