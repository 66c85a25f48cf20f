use crate::clipper::enums::ClipType;
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::contour::Contour;
use crate::geometry::point::Point;
use crate::geometry::polygon::Polygon;
use crate::utils::math::cycle_index;
use crate::utils::number::Number;

/// Flags the contours that cannot reach the result because their bounds
/// overlap no contour of the other operand. Returns `(subject, clip)` skip
/// flags. Only intersection and difference can drop contours; subject
/// contours are dropped for intersection alone.
pub fn minimax_test<T: Number>(
    subject: &Polygon<T>,
    clip: &Polygon<T>,
    clip_type: ClipType,
) -> (Vec<bool>, Vec<bool>) {
    let mut skip_subject = vec![false; subject.num_contours()];
    let mut skip_clip = vec![false; clip.num_contours()];

    if clip_type != ClipType::Intersection && clip_type != ClipType::Difference {
        return (skip_subject, skip_clip);
    }

    let subject_bounds: Vec<Option<BoundRect<T>>> =
        subject.contours().iter().map(Contour::bounds).collect();
    let clip_bounds: Vec<Option<BoundRect<T>>> =
        clip.contours().iter().map(Contour::bounds).collect();
    let overlaps = |a: &Option<BoundRect<T>>, b: &Option<BoundRect<T>>| match (a, b) {
        (Some(a), Some(b)) => a.overlaps(b),
        _ => false,
    };

    for (skip, clip_rect) in skip_clip.iter_mut().zip(clip_bounds.iter()) {
        *skip = !subject_bounds
            .iter()
            .any(|subject_rect| overlaps(subject_rect, clip_rect));
    }

    if clip_type == ClipType::Intersection {
        for (skip, subject_rect) in skip_subject.iter_mut().zip(subject_bounds.iter()) {
            *skip = !clip_bounds
                .iter()
                .any(|clip_rect| overlaps(subject_rect, clip_rect));
        }
    }

    (skip_subject, skip_clip)
}

/// Drops vertices inside horizontal runs, keeping the run's endpoints.
pub fn optimise_contour<T: Number>(points: &[Point<T>]) -> Vec<Point<T>> {
    let point_count = points.len();

    (0..point_count)
        .filter(|&i| {
            let y = points[i].y;

            points[cycle_index(i, point_count, -1)].y != y
                || points[cycle_index(i, point_count, 1)].y != y
        })
        .map(|i| points[i])
        .collect()
}
