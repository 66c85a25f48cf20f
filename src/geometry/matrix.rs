use crate::geometry::point::Point;
use crate::utils::number::Number;

/// 2x3 affine matrix:
/// ```text
/// | a  b  tx |
/// | c  d  ty |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T: Number> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub tx: T,
    pub ty: T,
}

impl<T: Number> Matrix<T> {
    pub fn new(a: T, b: T, c: T, d: T, tx: T, ty: T) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), T::zero(), T::zero())
    }

    pub fn translation(tx: T, ty: T) -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), tx, ty)
    }

    pub fn scale(sx: T, sy: T) -> Self {
        Self::new(sx, T::zero(), T::zero(), sy, T::zero(), T::zero())
    }

    /// Counter-clockwise rotation around the origin, in radians.
    pub fn rotation(angle: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, -sin, sin, cos, T::zero(), T::zero())
    }

    /// Builds from `[a, b, c, d, tx, ty]`.
    pub fn from_slice(values: &[T]) -> Option<Self> {
        match values {
            [a, b, c, d, tx, ty] => Some(Self::new(*a, *b, *c, *d, *tx, *ty)),
            _ => None,
        }
    }

    /// `self` first, then `other`.
    pub fn then(&self, other: &Self) -> Self {
        Self {
            a: other.a * self.a + other.b * self.c,
            b: other.a * self.b + other.b * self.d,
            c: other.c * self.a + other.d * self.c,
            d: other.c * self.b + other.d * self.d,
            tx: other.a * self.tx + other.b * self.ty + other.tx,
            ty: other.c * self.tx + other.d * self.ty + other.ty,
        }
    }

    #[inline]
    pub fn apply(&self, point: &Point<T>) -> Point<T> {
        Point::new(
            self.a * point.x + self.b * point.y + self.tx,
            self.c * point.x + self.d * point.y + self.ty,
        )
    }
}

impl<T: Number> Default for Matrix<T> {
    fn default() -> Self {
        Self::identity()
    }
}
