use crate::clipper::constants::{ABOVE, BELOW, UNASSIGNED};
use crate::clipper::enums::{BundleState, ClipType, PolyType};
use crate::geometry::point::Point;
use crate::utils::number::Number;

/// One non-horizontal edge of a bound, oriented from `bot` to `top`.
#[derive(Debug, Clone, Copy)]
pub struct TEdge<T: Number> {
    pub bot: Point<T>,
    pub top: Point<T>,
    pub xb: T,
    pub xt: T,
    pub dx: T,
    pub poly_type: PolyType,
    /// `[ABOVE | BELOW][PolyType]`
    pub bundle: [[bool; 2]; 2],
    pub bside: [bool; 2],
    pub bstate: [BundleState; 2],
    pub outp: [usize; 2],
    pub prev: usize,
    pub next: usize,
    pub pred: usize,
    pub succ: usize,
    pub next_bound: usize,
}

impl<T: Number> TEdge<T> {
    pub fn new(bot: Point<T>, top: Point<T>, poly_type: PolyType, clip_type: ClipType) -> Self {
        Self {
            bot,
            top,
            xb: bot.x,
            xt: bot.x,
            dx: (top.x - bot.x) / (top.y - bot.y),
            poly_type,
            bundle: [[false; 2]; 2],
            bside: [
                false,
                poly_type == PolyType::Clip && clip_type == ClipType::Difference,
            ],
            bstate: [BundleState::Unbundled; 2],
            outp: [UNASSIGNED; 2],
            prev: UNASSIGNED,
            next: UNASSIGNED,
            pred: UNASSIGNED,
            succ: UNASSIGNED,
            next_bound: UNASSIGNED,
        }
    }

    #[inline]
    pub fn has_bundle_above(&self) -> bool {
        self.bundle[ABOVE][PolyType::Clip.index()] || self.bundle[ABOVE][PolyType::Subject.index()]
    }

    /// Existence code of one operand: `above + 2 * below`.
    #[inline]
    pub fn exists(&self, poly_type: PolyType) -> u8 {
        let index = poly_type.index();

        self.bundle[ABOVE][index] as u8 + ((self.bundle[BELOW][index] as u8) << 1)
    }

    #[inline]
    pub fn top_x(&self, y: T) -> T {
        if y == self.top.y {
            self.top.x
        } else {
            self.bot.x + self.dx * (y - self.bot.y)
        }
    }

    /// Strict `(xb, dx)` order of the active edge table.
    #[inline]
    fn goes_before(&self, other: &Self) -> bool {
        self.xb < other.xb || (self.xb == other.xb && self.dx < other.dx)
    }
}

/// Edge arena plus the active edge table threaded through `prev`/`next`.
pub struct EdgeTable<T: Number> {
    edges: Vec<TEdge<T>>,
    active: usize,
}

impl<T: Number> EdgeTable<T> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            active: UNASSIGNED,
        }
    }

    pub fn clear(&mut self) {
        self.edges.clear();
        self.active = UNASSIGNED;
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> &TEdge<T> {
        &self.edges[index]
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> &mut TEdge<T> {
        &mut self.edges[index]
    }

    /// Leftmost active edge.
    #[cfg(test)]
    pub fn first_active(&self) -> usize {
        self.active
    }

    pub fn active_edges(&self) -> Vec<usize> {
        let mut result = Vec::new();
        let mut index = self.active;

        while index != UNASSIGNED {
            result.push(index);
            index = self.edges[index].next;
        }

        result
    }

    /// Creates the edges of one bound from its vertex run (bottom to top) and
    /// returns the first edge. A run shorter than two points yields `UNASSIGNED`.
    pub fn create_bound(
        &mut self,
        vertices: &[Point<T>],
        poly_type: PolyType,
        clip_type: ClipType,
    ) -> usize {
        if vertices.len() < 2 {
            return UNASSIGNED;
        }

        let first = self.edges.len();
        let last = first + vertices.len() - 2;

        for (offset, pair) in vertices.windows(2).enumerate() {
            let index = first + offset;
            let mut edge = TEdge::new(pair[0], pair[1], poly_type, clip_type);

            if index > first {
                edge.pred = index - 1;
            }

            if index < last {
                edge.succ = index + 1;
            }

            self.edges.push(edge);
        }

        first
    }

    /// Links `edge` after every active edge that does not sort after it.
    pub fn insert_into_ael(&mut self, edge: usize) {
        let mut prev = UNASSIGNED;
        let mut current = self.active;

        while current != UNASSIGNED && !self.edges[edge].goes_before(&self.edges[current]) {
            prev = current;
            current = self.edges[current].next;
        }

        self.edges[edge].prev = prev;
        self.edges[edge].next = current;

        if current != UNASSIGNED {
            self.edges[current].prev = edge;
        }

        if prev == UNASSIGNED {
            self.active = edge;
        } else {
            self.edges[prev].next = edge;
        }
    }

    /// Resets the above-bundle flags at boundary `yb` and collapses runs of
    /// coincident edges: the last edge of a run becomes the head and carries
    /// the xor of the run's flags.
    pub fn bundle_fields(&mut self, yb: T, epsilon: T) {
        let mut e0 = self.active;

        if e0 == UNASSIGNED {
            return;
        }

        self.reset_bundle_above(e0, yb);

        let mut current = self.edges[e0].next;

        while current != UNASSIGNED {
            self.reset_bundle_above(current, yb);

            let poly_type = self.edges[current].poly_type;
            let own = poly_type.index();
            let other = poly_type.other().index();

            if self.edges[current].bundle[ABOVE][own] {
                let head = self.edges[e0];
                let edge = &mut self.edges[current];

                if head.xb.almost_equal(edge.xb, Some(epsilon))
                    && head.dx.almost_equal(edge.dx, Some(epsilon))
                    && head.top.y != yb
                {
                    edge.bundle[ABOVE][own] ^= head.bundle[ABOVE][own];
                    edge.bundle[ABOVE][other] = head.bundle[ABOVE][other];
                    edge.bstate[ABOVE] = BundleState::BundleHead;

                    let tail = &mut self.edges[e0];
                    tail.bundle[ABOVE] = [false; 2];
                    tail.bstate[ABOVE] = BundleState::BundleTail;
                }

                e0 = current;
            }

            current = self.edges[current].next;
        }
    }

    fn reset_bundle_above(&mut self, index: usize, yb: T) {
        let edge = &mut self.edges[index];
        let own = edge.poly_type.index();
        let other = edge.poly_type.other().index();

        edge.bundle[ABOVE][own] = edge.top.y != yb;
        edge.bundle[ABOVE][other] = false;
        edge.bstate[ABOVE] = BundleState::Unbundled;
    }

    /// Unlinks edges ending at `yb` and projects the survivors onto `yt`.
    pub fn delete_terminating_edges(&mut self, yb: T, yt: T) {
        let mut current = self.active;

        while current != UNASSIGNED {
            let edge = self.edges[current];

            if edge.top.y == yb {
                self.unlink(current);

                if edge.bstate[BELOW] == BundleState::BundleHead && edge.prev != UNASSIGNED {
                    self.promote_tail(edge.prev, edge.outp[BELOW]);
                }
            } else {
                self.edges[current].xt = edge.top_x(yt);
            }

            current = edge.next;
        }
    }

    fn promote_tail(&mut self, index: usize, outp: usize) {
        if self.edges[index].bstate[BELOW] != BundleState::BundleTail {
            return;
        }

        let prev = self.edges[index].prev;
        let prev_is_tail =
            prev != UNASSIGNED && self.edges[prev].bstate[BELOW] == BundleState::BundleTail;
        let edge = &mut self.edges[index];

        edge.outp[BELOW] = outp;
        edge.bstate[BELOW] = if prev_is_tail {
            BundleState::BundleHead
        } else {
            BundleState::Unbundled
        };
    }

    fn unlink(&mut self, index: usize) {
        let prev = self.edges[index].prev;
        let next = self.edges[index].next;

        if prev == UNASSIGNED {
            self.active = next;
        } else {
            self.edges[prev].next = next;
        }

        if next != UNASSIGNED {
            self.edges[next].prev = prev;
        }
    }

    /// Rolls the above state into below for `yt`, swapping in the successor
    /// of every edge that ends there.
    pub fn prepare_for_next_scanbeam(&mut self, yt: T) {
        let mut current = self.active;

        while current != UNASSIGNED {
            let edge = self.edges[current];

            if edge.top.y == yt && edge.succ != UNASSIGNED {
                let succ = &mut self.edges[edge.succ];

                succ.outp[BELOW] = edge.outp[ABOVE];
                succ.bstate[BELOW] = edge.bstate[ABOVE];
                succ.bundle[BELOW] = edge.bundle[ABOVE];
                succ.prev = edge.prev;
                succ.next = edge.next;

                if edge.prev == UNASSIGNED {
                    self.active = edge.succ;
                } else {
                    self.edges[edge.prev].next = edge.succ;
                }

                if edge.next != UNASSIGNED {
                    self.edges[edge.next].prev = edge.succ;
                }
            } else {
                let updated = &mut self.edges[current];

                updated.outp[BELOW] = edge.outp[ABOVE];
                updated.bstate[BELOW] = edge.bstate[ABOVE];
                updated.bundle[BELOW] = edge.bundle[ABOVE];
                updated.xb = edge.xt;
            }

            self.edges[current].outp[ABOVE] = UNASSIGNED;
            current = edge.next;
        }
    }

    /// Exchanges the bundle ending in `e0` with the bundle ending in `e1`,
    /// which must directly follow it.
    pub fn swap_bundles(&mut self, e0: usize, e1: usize) {
        let mut prev_edge = self.edges[e0].prev;
        let next_edge = self.edges[e1].next;

        if next_edge != UNASSIGNED {
            self.edges[next_edge].prev = e0;
        }

        if self.edges[e0].bstate[ABOVE] == BundleState::BundleHead {
            while prev_edge != UNASSIGNED {
                prev_edge = self.edges[prev_edge].prev;

                if prev_edge == UNASSIGNED
                    || self.edges[prev_edge].bstate[ABOVE] != BundleState::BundleTail
                {
                    break;
                }
            }
        }

        let e0_bundle_start = if prev_edge == UNASSIGNED {
            self.active
        } else {
            self.edges[prev_edge].next
        };
        let e1_bundle_start = self.edges[e0].next;

        self.edges[e0_bundle_start].prev = e1;
        self.edges[e1].next = e0_bundle_start;

        if prev_edge == UNASSIGNED {
            self.active = e1_bundle_start;
        } else {
            self.edges[prev_edge].next = e1_bundle_start;
        }

        self.edges[e1_bundle_start].prev = prev_edge;
        self.edges[e0].next = next_edge;
    }
}

impl<T: Number> Default for EdgeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
