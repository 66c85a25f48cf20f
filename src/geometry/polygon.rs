use crate::clipper;
use crate::clipper::enums::ClipType;
use crate::clipper_config::ClipperConfig;
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::contour::Contour;
use crate::geometry::matrix::Matrix;
use crate::geometry::point::Point;
use crate::utils::number::Number;

/// Unordered set of contours. Holes are plain contours; which side is
/// inside is decided by the clipper, not stored here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon<T: Number> {
    contours: Vec<Contour<T>>,
}

impl<T: Number> Polygon<T> {
    pub fn new() -> Self {
        Self {
            contours: Vec::new(),
        }
    }

    pub fn from_contours(contours: Vec<Contour<T>>) -> Self {
        Self { contours }
    }

    pub fn add_contour(&mut self, contour: Contour<T>) {
        self.contours.push(contour);
    }

    pub fn contours(&self) -> &[Contour<T>] {
        &self.contours
    }

    pub fn num_contours(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn bounds(&self) -> Option<BoundRect<T>> {
        BoundRect::from_points(self.contours.iter().flat_map(|contour| contour.points()))
    }

    /// Sum of absolute contour areas, holes included as positive.
    pub fn area(&self) -> T {
        self.contours
            .iter()
            .fold(T::zero(), |acc, contour| acc + contour.area())
    }

    /// Area with holes subtracted: contours nested an odd number of levels
    /// deep count negative.
    pub fn area_even_odd(&self) -> T {
        self.contours
            .iter()
            .enumerate()
            .fold(T::zero(), |acc, (index, contour)| {
                let depth = match contour.points().first() {
                    Some(probe) => self.nesting_depth(index, contour, probe),
                    None => 0,
                };

                if depth % 2 == 0 {
                    acc + contour.area()
                } else {
                    acc - contour.area()
                }
            })
    }

    fn nesting_depth(&self, index: usize, contour: &Contour<T>, probe: &Point<T>) -> usize {
        self.contours
            .iter()
            .enumerate()
            .filter(|(other_index, other)| {
                *other_index != index
                    && other.area() > contour.area()
                    && other.contains(probe)
            })
            .count()
    }

    /// Nonzero rule across contours: inside if any contour contains the point.
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.containing_count(point) != 0
    }

    /// Even-odd rule across contours, so holes subtract.
    pub fn contains_even_odd(&self, point: &Point<T>) -> bool {
        self.containing_count(point) % 2 == 1
    }

    fn containing_count(&self, point: &Point<T>) -> usize {
        self.contours
            .iter()
            .filter(|contour| contour.contains(point))
            .count()
    }

    pub fn transform(&self, matrix: &Matrix<T>) -> Self {
        Self::from_contours(
            self.contours
                .iter()
                .map(|contour| contour.transform(matrix))
                .collect(),
        )
    }

    pub fn union(&self, other: &Self) -> Self {
        clipper::union(self, other)
    }

    pub fn intersect(&self, other: &Self) -> Self {
        clipper::intersect(self, other)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        clipper::subtract(self, other)
    }

    pub fn xor(&self, other: &Self) -> Self {
        clipper::xor(self, other)
    }

    pub fn boolean(&self, other: &Self, clip_type: ClipType, config: &ClipperConfig<T>) -> Self {
        clipper::execute(clip_type, self, other, config)
    }
}

impl<T: Number> From<Vec<Contour<T>>> for Polygon<T> {
    fn from(contours: Vec<Contour<T>>) -> Self {
        Self::from_contours(contours)
    }
}

impl<T: Number> From<Contour<T>> for Polygon<T> {
    fn from(contour: Contour<T>) -> Self {
        Self::from_contours(vec![contour])
    }
}
