use crate::geometry::point::Point;
use crate::utils::number::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundRect<T: Number> {
    position: Point<T>,
    size: Point<T>,
}

impl<T: Number> BoundRect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            position: Point::new(x, y),
            size: Point::new(width, height),
        }
    }

    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<T>>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min_point, max_point) = iter.fold((first, first), |(min_point, max_point), point| {
            (min_point.min(point), max_point.max(point))
        });

        Some(Self {
            position: min_point,
            size: max_point.sub(&min_point),
        })
    }

    pub fn position(&self) -> &Point<T> {
        &self.position
    }

    pub fn size(&self) -> &Point<T> {
        &self.size
    }

    pub fn x(&self) -> T {
        self.position.x
    }

    pub fn y(&self) -> T {
        self.position.y
    }

    pub fn width(&self) -> T {
        self.size.x
    }

    pub fn height(&self) -> T {
        self.size.y
    }

    pub fn left(&self) -> T {
        self.position.x
    }

    pub fn right(&self) -> T {
        self.position.x + self.size.x
    }

    pub fn bottom(&self) -> T {
        self.position.y
    }

    pub fn top(&self) -> T {
        self.position.y + self.size.y
    }

    /// Closed-interval test: rectangles that only touch still overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.top() < other.bottom()
            || self.bottom() > other.top())
    }

    pub fn union(&self, other: &Self) -> Self {
        let min_point = self.position.min(&other.position);
        let max_point = Point::new(self.right(), self.top())
            .max(&Point::new(other.right(), other.top()));

        Self {
            position: min_point,
            size: max_point.sub(&min_point),
        }
    }
}
