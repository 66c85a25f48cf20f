use crate::utils::number::Number;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    #[inline(always)]
    pub fn scale(&self, value: T) -> Self {
        Self::new(self.x * value, self.y * value)
    }

    #[inline(always)]
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline(always)]
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    #[inline(always)]
    pub fn cross(&self, other: &Self) -> T {
        self.x * other.y - self.y * other.x
    }

    #[inline(always)]
    pub fn len2(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline(always)]
    pub fn almost_equal(&self, other: &Self, tolerance: Option<T>) -> bool {
        self.x.almost_equal(other.x, tolerance) && self.y.almost_equal(other.y, tolerance)
    }

    /// X of the segment `begin..end` at this point's Y.
    #[inline(always)]
    pub fn interpolate_x(&self, begin: &Self, end: &Self) -> T {
        T::interpolate(self.y, begin.y, end.y, begin.x, end.x)
    }
}
