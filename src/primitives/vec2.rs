//! 2D vector type for directions and offsets.

use num_traits::Float;
use std::ops::Mul;

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a unit vector pointing at `angle` radians from the X axis.
    #[inline]
    pub fn from_angle(angle: F) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    /// Returns the magnitude (length) of the vector.
    ///
    /// Uses `hypot`, so finite components never overflow to infinity unless
    /// the length itself is out of range.
    #[inline]
    pub fn magnitude(self) -> F {
        self.x.hypot(self.y)
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude() {
        let v: Vec2<f64> = Vec2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_large_components() {
        let v: Vec2<f64> = Vec2::new(3e200, 4e200);
        assert!(v.magnitude().is_finite());
        assert_relative_eq!(v.magnitude(), 5e200, max_relative = 1e-12);
    }

    #[test]
    fn test_from_angle() {
        let v: Vec2<f64> = Vec2::from_angle(std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scale() {
        let a: Vec2<f64> = Vec2::new(1.0, 2.0);
        let scaled = a * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);
    }
}
