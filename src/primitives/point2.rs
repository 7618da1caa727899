//! 2D point type used for control points and sampled curve points.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A point in 2D space.
///
/// Control points and curve samples share this type; a point has no identity
/// beyond its position in the sequence that holds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the origin `(0, 0)`.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        (other - self).magnitude()
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<F>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
        }
    }
}

impl<F> From<[F; 2]> for Point2<F> {
    #[inline]
    fn from([x, y]: [F; 2]) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_distance_large_coordinates() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(1e200, 1e200);
        let d = a.distance(b);
        assert!(d.is_finite());
        assert_relative_eq!(d, 2.0_f64.sqrt() * 1e200, max_relative = 1e-12);
    }

    #[test]
    fn test_offset() {
        let p: Point2<f64> = Point2::new(1.0, 1.0);
        let moved = p + Vec2::new(2.0, -1.0);
        assert_eq!(moved, Point2::new(3.0, 0.0));
        assert_eq!(moved - p, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_conversions() {
        let a: Point2<f64> = [1.5, 2.5].into();
        assert_eq!(a, Point2::new(1.5, 2.5));
        assert!(a.is_finite());
        assert!(!Point2::new(f64::NAN, 0.0).is_finite());
    }
}
