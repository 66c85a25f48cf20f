use crate::utils::{almost_equal::AlmostEqual, interpolate::Interpolate};
use num_traits::{Float, FromPrimitive, ToPrimitive};
use std::fmt::Debug;

/// Scalar used by every geometry and clipper type.
pub trait Number:
    Float + FromPrimitive + ToPrimitive + AlmostEqual + Interpolate + Debug + 'static
{
    /// Signed shoelace area of a flat `[x0, y0, x1, y1, ...]` list.
    fn polygon_area(points: &[Self]) -> f64 {
        let len = points.len();

        if len < 6 || len & 1 != 0 {
            return 0.0;
        }

        let mut acc = Self::zero();

        for base in (0..len).step_by(2) {
            let x0 = points[base];
            let y0 = points[base + 1];
            let x1 = points[(base + 2) % len];
            let y1 = points[(base + 3) % len];

            acc = acc + (x0 * y1 - x1 * y0);
        }

        0.5 * acc.to_f64().unwrap_or(0.0)
    }
}

impl Number for f64 {}

impl Number for f32 {}
