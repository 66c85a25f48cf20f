use crate::clipper::constants::{ABOVE, BELOW, UNASSIGNED};
use crate::clipper::enums::{ClipType, HorizontalState, PolyType, VertexType};
use crate::clipper::intersect_node::IntersectTable;
use crate::clipper::local_minima::LocalMinimaTable;
use crate::clipper::out_rec::OutRec;
use crate::clipper::scanbeam::Scanbeam;
use crate::clipper::t_edge::EdgeTable;
use crate::clipper::utils::{minimax_test, optimise_contour};
use crate::clipper_config::ClipperConfig;
use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;
use crate::utils::math::cycle_index;
use crate::utils::number::Number;

const SUBJECT: usize = PolyType::Subject as usize;
const CLIP: usize = PolyType::Clip as usize;

/// Per-operand occupancy of the four quadrants around a vertex.
struct Quadrants {
    tr: [bool; 2],
    tl: [bool; 2],
    br: [bool; 2],
    bl: [bool; 2],
}

impl Quadrants {
    fn vertex_type(&self, clip_type: ClipType) -> VertexType {
        VertexType::from_quadrants(
            clip_type.combine(self.tr[CLIP], self.tr[SUBJECT]),
            clip_type.combine(self.tl[CLIP], self.tl[SUBJECT]),
            clip_type.combine(self.br[CLIP], self.br[SUBJECT]),
            clip_type.combine(self.bl[CLIP], self.bl[SUBJECT]),
        )
    }
}

pub struct Clipper<T: Number> {
    config: ClipperConfig<T>,
    clip_type: ClipType,
    edges: EdgeTable<T>,
    local_minima: LocalMinimaTable<T>,
    scanbeam: Scanbeam<T>,
    intersections: IntersectTable<T>,
    out_rec: OutRec<T>,
}

impl<T: Number> Clipper<T> {
    pub fn new(config: ClipperConfig<T>) -> Self {
        Self {
            config,
            clip_type: ClipType::Intersection,
            edges: EdgeTable::new(),
            local_minima: LocalMinimaTable::new(),
            scanbeam: Scanbeam::new(),
            intersections: IntersectTable::new(),
            out_rec: OutRec::new(),
        }
    }

    pub fn config(&self) -> &ClipperConfig<T> {
        &self.config
    }

    pub fn execute(
        &mut self,
        clip_type: ClipType,
        subject: &Polygon<T>,
        clip: &Polygon<T>,
    ) -> Polygon<T> {
        if let Some(result) = trivial_result(clip_type, subject, clip) {
            return result;
        }

        self.reset(clip_type);

        let (skip_subject, skip_clip) = if self.config.use_prefilter {
            minimax_test(subject, clip, clip_type)
        } else {
            (Vec::new(), Vec::new())
        };

        self.add_polygon(subject, PolyType::Subject, &skip_subject);
        self.add_polygon(clip, PolyType::Clip, &skip_clip);

        if self.local_minima.is_empty() {
            return Polygon::new();
        }

        self.construct()
    }

    fn reset(&mut self, clip_type: ClipType) {
        self.clip_type = clip_type;
        self.edges.clear();
        self.local_minima.clear();
        self.scanbeam.clear();
        self.intersections.clear();
        self.out_rec.clear();
    }

    fn add_polygon(&mut self, polygon: &Polygon<T>, poly_type: PolyType, skip: &[bool]) {
        for (index, contour) in polygon.contours().iter().enumerate() {
            if skip.get(index).copied().unwrap_or(false) {
                continue;
            }

            self.add_contour(contour.points(), poly_type);
        }
    }

    /// Splits one contour into bounds running from each local minimum up to
    /// the next local maximum, in both walking directions.
    fn add_contour(&mut self, points: &[Point<T>], poly_type: PolyType) {
        let vertices = optimise_contour(points);
        let vertex_count = vertices.len();

        for vertex in vertices.iter() {
            self.scanbeam.add(vertex.y);
        }

        for offset in [1isize, -1] {
            for min in 0..vertex_count {
                let y = vertices[min].y;
                let behind = vertices[cycle_index(min, vertex_count, -offset)].y;
                let ahead = vertices[cycle_index(min, vertex_count, offset)].y;

                // Flat runs start their bound at the vertex leaving the run.
                if !(behind >= y && ahead > y) {
                    continue;
                }

                let mut max = cycle_index(min, vertex_count, offset);
                let mut run = vec![vertices[min], vertices[max]];

                loop {
                    let next = cycle_index(max, vertex_count, offset);

                    if vertices[next].y <= vertices[max].y {
                        break;
                    }

                    max = next;
                    run.push(vertices[max]);
                }

                let bound = self.edges.create_bound(&run, poly_type, self.clip_type);
                self.local_minima.insert_bound(y, bound, &mut self.edges);
            }
        }
    }

    fn construct(&mut self) -> Polygon<T> {
        let beams = self.scanbeam.build();
        let epsilon = self.config.epsilon;
        let mut parity = [false; 2];
        let mut minima_index = 0;

        parity[CLIP] = self.clip_type == ClipType::Difference;

        for (beam_index, &yb) in beams.iter().enumerate() {
            let yt = beams.get(beam_index + 1).copied();

            while let Some(minima) = self.local_minima.get(minima_index) {
                if minima.y > yb {
                    break;
                }

                for bound in self.local_minima.bounds(minima_index, &self.edges) {
                    self.edges.insert_into_ael(bound);
                }

                minima_index += 1;
            }

            self.edges.bundle_fields(yb, epsilon);
            self.process_edges(yb, &mut parity);
            self.edges.delete_terminating_edges(yb, yt.unwrap_or(yb));

            if let Some(yt) = yt {
                self.intersections.build(&self.edges, yt - yb, epsilon);
                self.process_intersections(yb);
                self.edges.prepare_for_next_scanbeam(yt);
            }
        }

        self.out_rec.generate()
    }

    /// Classifies every bundle crossing boundary `yb` and grows the output
    /// chains at the contributing ones.
    fn process_edges(&mut self, yb: T, parity: &mut [bool; 2]) {
        let mut horiz = [HorizontalState::None; 2];
        let mut px = T::neg_infinity();
        let mut cf = UNASSIGNED;

        for index in self.edges.active_edges() {
            let edge = *self.edges.get(index);
            let exists = [edge.exists(PolyType::Subject), edge.exists(PolyType::Clip)];

            if exists == [0, 0] {
                continue;
            }

            let contributing = self.clip_type.is_contributing(exists, *parity, horiz);
            let mut quadrants = Quadrants {
                tr: [false; 2],
                tl: [false; 2],
                br: [false; 2],
                bl: [false; 2],
            };

            for k in [SUBJECT, CLIP] {
                let horizontal = horiz[k] != HorizontalState::None;

                quadrants.br[k] = parity[k];
                quadrants.bl[k] = parity[k] ^ edge.bundle[ABOVE][k];
                quadrants.tr[k] = parity[k] ^ horizontal;
                quadrants.tl[k] = parity[k] ^ horizontal ^ edge.bundle[BELOW][k];
            }

            let bside = *parity;

            for k in [SUBJECT, CLIP] {
                parity[k] ^= edge.bundle[ABOVE][k];

                if exists[k] != 0 {
                    horiz[k] = horiz[k].next(exists[k], parity[k]);
                }
            }

            let mut outp = edge.outp;

            if contributing {
                let xb = edge.xb;
                let out_rec = &mut self.out_rec;

                match quadrants.vertex_type(self.clip_type) {
                    VertexType::ExternalMinimum | VertexType::InternalMinimum => {
                        outp[ABOVE] = out_rec.add_local_min(xb, yb);
                        px = xb;
                        cf = outp[ABOVE];
                    }
                    VertexType::ExternalRightIntermediate => {
                        if xb != px {
                            out_rec.add_right(cf, xb, yb);
                            px = xb;
                        }

                        outp[ABOVE] = cf;
                        cf = UNASSIGNED;
                    }
                    VertexType::ExternalLeftIntermediate => {
                        out_rec.add_left(outp[BELOW], xb, yb);
                        px = xb;
                        cf = outp[BELOW];
                    }
                    VertexType::ExternalMaximum => {
                        if xb != px {
                            out_rec.add_left(cf, xb, yb);
                            px = xb;
                        }

                        out_rec.merge_right(cf, outp[BELOW]);
                        cf = UNASSIGNED;
                    }
                    VertexType::InternalLeftIntermediate => {
                        if xb != px {
                            out_rec.add_left(cf, xb, yb);
                            px = xb;
                        }

                        outp[ABOVE] = cf;
                        cf = UNASSIGNED;
                    }
                    VertexType::InternalRightIntermediate => {
                        out_rec.add_right(outp[BELOW], xb, yb);
                        px = xb;
                        cf = outp[BELOW];
                        outp[BELOW] = UNASSIGNED;
                    }
                    VertexType::InternalMaximum => {
                        if xb != px {
                            out_rec.add_right(cf, xb, yb);
                            px = xb;
                        }

                        out_rec.merge_left(cf, outp[BELOW]);
                        cf = UNASSIGNED;
                        outp[BELOW] = UNASSIGNED;
                    }
                    VertexType::InternalMaximumAndMinimum => {
                        if xb != px {
                            out_rec.add_right(cf, xb, yb);
                            px = xb;
                        }

                        out_rec.merge_left(cf, outp[BELOW]);
                        outp[BELOW] = UNASSIGNED;
                        outp[ABOVE] = out_rec.add_local_min(xb, yb);
                        cf = outp[ABOVE];
                    }
                    VertexType::ExternalMaximumAndMinimum => {
                        if xb != px {
                            out_rec.add_left(cf, xb, yb);
                            px = xb;
                        }

                        out_rec.merge_right(cf, outp[BELOW]);
                        outp[BELOW] = UNASSIGNED;
                        outp[ABOVE] = out_rec.add_local_min(xb, yb);
                        cf = outp[ABOVE];
                    }
                    VertexType::LeftEdge => {
                        if edge.bot.y == yb {
                            out_rec.add_left(outp[BELOW], xb, yb);
                        }

                        outp[ABOVE] = outp[BELOW];
                        px = xb;
                    }
                    VertexType::RightEdge => {
                        if edge.bot.y == yb {
                            out_rec.add_right(outp[BELOW], xb, yb);
                        }

                        outp[ABOVE] = outp[BELOW];
                        px = xb;
                    }
                    _ => {}
                }
            }

            let target = self.edges.get_mut(index);
            target.bside = bside;
            target.outp = outp;
        }
    }

    /// Emits output at each crossing of the beam above `yb`, then swaps the
    /// crossing bundles so the table is ordered for the top of the beam.
    fn process_intersections(&mut self, yb: T) {
        let nodes = self.intersections.nodes().to_vec();

        for node in nodes {
            let e0 = node.edge1;
            let e1 = node.edge2;
            let edge0 = *self.edges.get(e0);
            let edge1 = *self.edges.get(e1);
            let bundle0 = edge0.bundle[ABOVE];
            let bundle1 = edge1.bundle[ABOVE];

            if edge0.has_bundle_above() && edge1.has_bundle_above() {
                let p = edge0.outp[ABOVE];
                let q = edge1.outp[ABOVE];
                let ix = node.point.x;
                let iy = node.point.y + yb;
                let mut inside = [false; 2];

                for k in [SUBJECT, CLIP] {
                    inside[k] = (bundle0[k] && !edge0.bside[k])
                        || (bundle1[k] && edge1.bside[k])
                        || (!bundle0[k] && !bundle1[k] && edge0.bside[k] && edge1.bside[k]);
                }

                let mut quadrants = Quadrants {
                    tr: inside,
                    tl: inside,
                    br: inside,
                    bl: inside,
                };

                for k in [SUBJECT, CLIP] {
                    quadrants.tl[k] ^= bundle1[k];
                    quadrants.br[k] ^= bundle0[k];
                    quadrants.bl[k] ^= bundle1[k] ^ bundle0[k];
                }

                let (outp0, outp1) =
                    self.intersection_output(quadrants.vertex_type(self.clip_type), p, q, ix, iy);

                self.edges.get_mut(e0).outp[ABOVE] = outp0;
                self.edges.get_mut(e1).outp[ABOVE] = outp1;
            }

            for k in [SUBJECT, CLIP] {
                if bundle0[k] {
                    self.edges.get_mut(e1).bside[k] ^= true;
                }

                if bundle1[k] {
                    self.edges.get_mut(e0).bside[k] ^= true;
                }
            }

            self.edges.swap_bundles(e0, e1);
        }
    }

    /// Returns the new above-outputs of the left and right crossing edges.
    fn intersection_output(
        &mut self,
        vertex_type: VertexType,
        p: usize,
        q: usize,
        ix: T,
        iy: T,
    ) -> (usize, usize) {
        let out_rec = &mut self.out_rec;
        let both = p != UNASSIGNED && q != UNASSIGNED;

        match vertex_type {
            VertexType::ExternalMinimum | VertexType::InternalMinimum => {
                let node = out_rec.add_local_min(ix, iy);
                (node, node)
            }
            VertexType::ExternalRightIntermediate if p != UNASSIGNED => {
                out_rec.add_right(p, ix, iy);
                (UNASSIGNED, p)
            }
            VertexType::ExternalLeftIntermediate if q != UNASSIGNED => {
                out_rec.add_left(q, ix, iy);
                (q, UNASSIGNED)
            }
            VertexType::ExternalMaximum if both => {
                out_rec.add_left(p, ix, iy);
                out_rec.merge_right(p, q);
                (UNASSIGNED, UNASSIGNED)
            }
            VertexType::InternalLeftIntermediate if p != UNASSIGNED => {
                out_rec.add_left(p, ix, iy);
                (UNASSIGNED, p)
            }
            VertexType::InternalRightIntermediate if q != UNASSIGNED => {
                out_rec.add_right(q, ix, iy);
                (q, UNASSIGNED)
            }
            VertexType::InternalMaximum if both => {
                out_rec.add_right(p, ix, iy);
                out_rec.merge_left(p, q);
                (UNASSIGNED, UNASSIGNED)
            }
            VertexType::InternalMaximumAndMinimum if both => {
                out_rec.add_right(p, ix, iy);
                out_rec.merge_left(p, q);
                let node = out_rec.add_local_min(ix, iy);
                (node, node)
            }
            VertexType::ExternalMaximumAndMinimum if both => {
                out_rec.add_left(p, ix, iy);
                out_rec.merge_right(p, q);
                let node = out_rec.add_local_min(ix, iy);
                (node, node)
            }
            _ => (p, q),
        }
    }
}

impl<T: Number> Default for Clipper<T> {
    fn default() -> Self {
        Self::new(ClipperConfig::default())
    }
}

/// Results that need no sweep: empty operands.
fn trivial_result<T: Number>(
    clip_type: ClipType,
    subject: &Polygon<T>,
    clip: &Polygon<T>,
) -> Option<Polygon<T>> {
    match (subject.is_empty(), clip.is_empty()) {
        (true, true) => Some(Polygon::new()),
        (true, false) => match clip_type {
            ClipType::Intersection | ClipType::Difference => Some(Polygon::new()),
            ClipType::Union | ClipType::Xor => Some(clip.clone()),
        },
        (false, true) => match clip_type {
            ClipType::Intersection => Some(Polygon::new()),
            ClipType::Union | ClipType::Xor | ClipType::Difference => Some(subject.clone()),
        },
        (false, false) => None,
    }
}
