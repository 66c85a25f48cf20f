use crate::clipper::constants::UNASSIGNED;
use crate::clipper::out_rec::OutRec;
use crate::geometry::point::Point;

fn pts(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_chain_grows_at_both_ends() {
    let mut out_rec = OutRec::new();
    let node = out_rec.add_local_min(1.0, 0.0);

    out_rec.add_right(node, 2.0, 0.0);
    out_rec.add_left(node, 0.0, 1.0);

    assert_eq!(out_rec.chain(node), pts(&[(0.0, 1.0), (1.0, 0.0), (2.0, 0.0)]));

    let result = out_rec.generate();

    assert_eq!(result.num_contours(), 1);
    assert_eq!(
        result.contours()[0].points(),
        pts(&[(2.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).as_slice()
    );
}

#[test]
fn test_generate_drops_degenerate_chains() {
    let mut out_rec = OutRec::new();
    let line = out_rec.add_local_min(0.0, 0.0);

    out_rec.add_right(line, 5.0, 5.0);

    assert!(out_rec.generate().is_empty());
    assert!(!out_rec.is_active(line));
}

#[test]
fn test_generate_skips_repeated_vertices() {
    let mut out_rec = OutRec::new();
    let node = out_rec.add_local_min(0.0, 0.0);

    for &(x, y) in &[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)] {
        out_rec.add_right(node, x, y);
    }

    let result = out_rec.generate();

    assert_eq!(result.num_contours(), 1);
    assert_eq!(
        result.contours()[0].points(),
        pts(&[(4.0, 4.0), (4.0, 0.0), (0.0, 0.0)]).as_slice()
    );
}

#[test]
fn test_merge_left_prepends_chain() {
    let mut out_rec = OutRec::new();
    let p = out_rec.add_local_min(0.0, 0.0);
    let q = out_rec.add_local_min(5.0, 5.0);

    out_rec.add_right(p, 1.0, 0.0);
    out_rec.add_right(q, 6.0, 5.0);
    out_rec.merge_left(p, q);

    assert_eq!(out_rec.find(p), out_rec.find(q));
    assert!(!out_rec.is_active(p));
    assert!(out_rec.is_active(q));
    assert_eq!(
        out_rec.chain(p),
        pts(&[(0.0, 0.0), (1.0, 0.0), (5.0, 5.0), (6.0, 5.0)])
    );
    assert_eq!(out_rec.generate().num_contours(), 1);
}

#[test]
fn test_merge_right_appends_chain() {
    let mut out_rec = OutRec::new();
    let p = out_rec.add_local_min(0.0, 0.0);
    let q = out_rec.add_local_min(5.0, 5.0);

    out_rec.add_right(p, 1.0, 0.0);
    out_rec.add_right(q, 6.0, 5.0);
    out_rec.merge_right(p, q);

    assert_eq!(
        out_rec.chain(q),
        pts(&[(5.0, 5.0), (6.0, 5.0), (0.0, 0.0), (1.0, 0.0)])
    );

    out_rec.add_right(p, 2.0, 2.0);

    assert_eq!(out_rec.chain(q).last(), Some(&Point::new(2.0, 2.0)));
}

#[test]
fn test_merge_keeps_higher_rank_root() {
    let mut out_rec = OutRec::new();
    let r = out_rec.add_local_min(0.0, 0.0);
    let x = out_rec.add_local_min(1.0, 1.0);

    out_rec.merge_left(x, r);

    let s = out_rec.add_local_min(9.0, 9.0);

    out_rec.merge_left(r, s);

    assert_eq!(out_rec.find(s), r);
    assert!(out_rec.is_active(r));
    assert!(!out_rec.is_active(s));
    assert!(!out_rec.is_active(x));
    assert_eq!(
        out_rec.chain(x),
        pts(&[(1.0, 1.0), (0.0, 0.0), (9.0, 9.0)])
    );
}

#[test]
fn test_unassigned_handles_are_ignored() {
    let mut out_rec = OutRec::<f64>::new();
    let node = out_rec.add_local_min(0.0, 0.0);

    out_rec.add_left(UNASSIGNED, 1.0, 1.0);
    out_rec.add_right(UNASSIGNED, 1.0, 1.0);
    out_rec.merge_left(UNASSIGNED, node);
    out_rec.merge_right(node, UNASSIGNED);

    assert_eq!(out_rec.point_count(), 1);
    assert!(out_rec.chain(UNASSIGNED).is_empty());
    assert!(out_rec.is_active(node));
    assert!(!out_rec.is_active(UNASSIGNED));
}

#[test]
fn test_merge_within_one_set_is_noop() {
    let mut out_rec = OutRec::new();
    let p = out_rec.add_local_min(0.0, 0.0);
    let q = out_rec.add_local_min(1.0, 0.0);

    out_rec.merge_left(p, q);
    out_rec.merge_right(q, p);

    assert_eq!(out_rec.chain(q), pts(&[(0.0, 0.0), (1.0, 0.0)]));
    assert_eq!(out_rec.len(), 2);
}
