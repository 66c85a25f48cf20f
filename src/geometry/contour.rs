use crate::geometry::bound_rect::BoundRect;
use crate::geometry::matrix::Matrix;
use crate::geometry::point::Point;
use crate::utils::math::cycle_index;
use crate::utils::number::Number;

/// Closed point cycle. The closing edge from the last point back to the first
/// is implicit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour<T: Number> {
    points: Vec<Point<T>>,
}

impl<T: Number> Contour<T> {
    pub fn new(points: Vec<Point<T>>) -> Self {
        Self { points }
    }

    pub fn from_coords(coords: &[(T, T)]) -> Self {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn at(&self, index: usize) -> &Point<T> {
        &self.points[cycle_index(index, self.points.len(), 0)]
    }

    pub fn bounds(&self) -> Option<BoundRect<T>> {
        BoundRect::from_points(self.points.iter())
    }

    /// Positive for counter-clockwise point order.
    pub fn signed_area(&self) -> T {
        let point_count = self.points.len();

        if point_count < 3 {
            return T::zero();
        }

        let two = T::one() + T::one();
        let sum = (0..point_count).fold(T::zero(), |acc, i| {
            let curr = &self.points[i];
            let next = &self.points[cycle_index(i, point_count, 1)];
            acc + curr.cross(next)
        });

        sum / two
    }

    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// Even-odd ray cast against this contour alone.
    pub fn contains(&self, point: &Point<T>) -> bool {
        let point_count = self.points.len();

        if point_count < 3 {
            return false;
        }

        let mut inside = false;

        for i in 0..point_count {
            let curr = &self.points[i];
            let prev = &self.points[cycle_index(i, point_count, -1)];

            if (curr.y > point.y) != (prev.y > point.y) && point.x < point.interpolate_x(prev, curr)
            {
                inside = !inside;
            }
        }

        inside
    }

    pub fn transform(&self, matrix: &Matrix<T>) -> Self {
        Self::new(self.points.iter().map(|point| matrix.apply(point)).collect())
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }
}

impl<T: Number> From<Vec<Point<T>>> for Contour<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self::new(points)
    }
}
