use crate::clipper::enums::{ClipType, PolyType};
use crate::clipper::intersect_node::IntersectTable;
use crate::clipper::t_edge::EdgeTable;
use crate::geometry::point::Point;

const EPSILON: f64 = 1e-9;

/// Builds single-edge bounds and prepares them for the beam `0..10`.
fn beam_edges(segments: &[((f64, f64), (f64, f64))]) -> (EdgeTable<f64>, Vec<usize>) {
    let mut edges = EdgeTable::new();
    let mut indices = Vec::new();

    for (index, &(bot, top)) in segments.iter().enumerate() {
        let poly_type = if index % 2 == 0 {
            PolyType::Subject
        } else {
            PolyType::Clip
        };
        let edge = edges.create_bound(
            &[Point::new(bot.0, bot.1), Point::new(top.0, top.1)],
            poly_type,
            ClipType::Union,
        );

        edges.insert_into_ael(edge);
        indices.push(edge);
    }

    edges.bundle_fields(0.0, EPSILON);
    edges.delete_terminating_edges(0.0, 10.0);

    (edges, indices)
}

#[test]
fn test_crossing_pair() {
    let (edges, indices) = beam_edges(&[((0.0, 0.0), (10.0, 10.0)), ((10.0, 0.0), (0.0, 10.0))]);
    let mut table = IntersectTable::new();

    table.build(&edges, 10.0, EPSILON);

    assert_eq!(table.len(), 1);

    let node = table.nodes()[0];

    assert_eq!((node.edge1, node.edge2), (indices[0], indices[1]));
    assert_eq!(node.point, Point::new(5.0, 5.0));
}

#[test]
fn test_parallel_and_diverging_edges_do_not_cross() {
    let (edges, _) = beam_edges(&[
        ((0.0, 0.0), (5.0, 10.0)),
        ((2.0, 0.0), (7.0, 10.0)),
        ((4.0, 0.0), (12.0, 10.0)),
    ]);
    let mut table = IntersectTable::new();

    table.build(&edges, 10.0, EPSILON);

    assert!(table.is_empty());
}

#[test]
fn test_intersections_sorted_by_height() {
    let (edges, indices) = beam_edges(&[
        ((0.0, 0.0), (10.0, 10.0)),
        ((4.0, 0.0), (4.0, 10.0)),
        ((10.0, 0.0), (0.0, 10.0)),
    ]);
    let mut table = IntersectTable::new();

    table.build(&edges, 10.0, EPSILON);

    let found: Vec<(usize, usize, Point<f64>)> = table
        .nodes()
        .iter()
        .map(|node| (node.edge1, node.edge2, node.point))
        .collect();

    assert_eq!(
        found,
        vec![
            (indices[0], indices[1], Point::new(4.0, 4.0)),
            (indices[0], indices[2], Point::new(5.0, 5.0)),
            (indices[1], indices[2], Point::new(4.0, 6.0)),
        ]
    );
}

#[test]
fn test_build_clears_previous_beam() {
    let (edges, _) = beam_edges(&[((0.0, 0.0), (10.0, 10.0)), ((10.0, 0.0), (0.0, 10.0))]);
    let mut table = IntersectTable::new();

    table.build(&edges, 10.0, EPSILON);
    table.build(&edges, 10.0, EPSILON);

    assert_eq!(table.len(), 1);

    table.clear();
    assert!(table.is_empty());
}
