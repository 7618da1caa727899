//! Uniform cubic B-splines.
//!
//! Each window of four consecutive control points is blended with the uniform
//! cubic B-spline basis. The curve follows the control polygon without passing
//! through the control points, and it is C2-continuous across segment joins.
//!
//! # Example
//!
//! ```
//! use splinum::{Point2, curves::bspline_points};
//!
//! let control_points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(5.0, -1.0),
//! ];
//!
//! let curve = bspline_points(&control_points, 50).unwrap();
//! assert_eq!(curve.len(), 2 * 50);
//! ```

use super::{sample_parameter, validate, MIN_CONTROL_POINTS};
use crate::error::SplineError;
use crate::primitives::Point2;
use num_traits::Float;

/// Evaluates the four uniform cubic B-spline basis functions at `u`.
///
/// ```text
/// b0 = (1 - u)^3 / 6
/// b1 = (3u^3 - 6u^2 + 4) / 6
/// b2 = (-3u^3 + 3u^2 + 3u + 1) / 6
/// b3 = u^3 / 6
/// ```
///
/// The weights sum to one for every `u` (partition of unity).
#[inline]
pub fn uniform_basis<F: Float>(u: F) -> [F; 4] {
    let one = F::one();
    let three = F::from(3.0).unwrap();
    let four = F::from(4.0).unwrap();
    let six = F::from(6.0).unwrap();

    let u2 = u * u;
    let u3 = u2 * u;
    let v = one - u;

    [
        v * v * v / six,
        (three * u3 - six * u2 + four) / six,
        (-three * u3 + three * u2 + three * u + one) / six,
        u3 / six,
    ]
}

/// Samples a uniform cubic B-spline through `points`.
///
/// For every window of four consecutive points, `samples_per_segment` points
/// are produced at `u = j / (samples_per_segment - 1)`, so both segment
/// endpoints are included. The result has `(n - 3) * samples_per_segment`
/// points.
///
/// # Errors
///
/// Returns [`SplineError::TooFewControlPoints`] for fewer than 4 points,
/// [`SplineError::TooFewSamples`] when `samples_per_segment < 2`, and
/// [`SplineError::NonFiniteControlPoint`] when a coordinate is NaN or infinite.
///
/// # Example
///
/// ```
/// use splinum::{Point2, curves::bspline_points};
///
/// let points = vec![
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 2.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(4.0, 0.0),
/// ];
///
/// let curve = bspline_points(&points, 2).unwrap();
/// assert!((curve[0].x - 7.0 / 6.0).abs() < 1e-9);
/// assert!((curve[1].x - 17.0 / 6.0).abs() < 1e-9);
/// ```
pub fn bspline_points<F: Float>(
    points: &[Point2<F>],
    samples_per_segment: usize,
) -> Result<Vec<Point2<F>>, SplineError> {
    validate(points, samples_per_segment)?;

    let mut curve = Vec::with_capacity(super::expected_len(points.len(), samples_per_segment));
    for window in points.windows(MIN_CONTROL_POINTS) {
        let window = [window[0], window[1], window[2], window[3]];
        for j in 0..samples_per_segment {
            let u = sample_parameter(j, samples_per_segment);
            curve.push(UniformBSpline2::eval_segment(window, u));
        }
    }

    Ok(curve)
}

/// A uniform cubic B-spline in 2D that owns its control points.
///
/// Useful when the control points are edited between evaluations; the
/// sampling itself goes through [`bspline_points`].
#[derive(Debug, Clone, PartialEq)]
pub struct UniformBSpline2<F> {
    /// Control points steering the curve
    pub control_points: Vec<Point2<F>>,
}

impl<F: Float> UniformBSpline2<F> {
    /// Creates a B-spline over `control_points`.
    ///
    /// # Errors
    ///
    /// Returns [`SplineError::TooFewControlPoints`] if fewer than 4 points are given.
    pub fn new(control_points: Vec<Point2<F>>) -> Result<Self, SplineError> {
        if control_points.len() < MIN_CONTROL_POINTS {
            return Err(SplineError::TooFewControlPoints {
                required: MIN_CONTROL_POINTS,
                provided: control_points.len(),
            });
        }
        Ok(Self { control_points })
    }

    /// Returns the number of cubic segments (`n - 3`).
    pub fn num_segments(&self) -> usize {
        self.control_points
            .len()
            .saturating_sub(MIN_CONTROL_POINTS - 1)
    }

    /// Evaluates `segment` at local parameter `u`, clamped to `[0, 1]`.
    ///
    /// Returns `None` if `segment` is out of range.
    pub fn eval(&self, segment: usize, u: F) -> Option<Point2<F>> {
        if segment >= self.num_segments() {
            return None;
        }
        let p = &self.control_points[segment..segment + MIN_CONTROL_POINTS];
        let u = u.max(F::zero()).min(F::one());
        Some(Self::eval_segment([p[0], p[1], p[2], p[3]], u))
    }

    /// Blends one window of four control points at parameter `u`.
    #[inline]
    pub fn eval_segment(window: [Point2<F>; 4], u: F) -> Point2<F> {
        let [b0, b1, b2, b3] = uniform_basis(u);
        let [p0, p1, p2, p3] = window;
        Point2::new(
            b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
            b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
        )
    }

    /// Samples the whole curve. See [`bspline_points`].
    pub fn sample(&self, samples_per_segment: usize) -> Result<Vec<Point2<F>>, SplineError> {
        bspline_points(&self.control_points, samples_per_segment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_points() -> Vec<Point2<f64>> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 3.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, -1.0),
            Point2::new(7.0, 2.0),
            Point2::new(2.0, 5.0),
            Point2::new(5.0, 5.0),
        ]
    }

    #[test]
    fn test_partition_of_unity() {
        for i in 0..=1000 {
            let u = i as f64 / 1000.0;
            let sum: f64 = uniform_basis(u).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_basis_endpoints() {
        let b = uniform_basis(0.0_f64);
        assert_relative_eq!(b[0], 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(b[1], 4.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(b[2], 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(b[3], 0.0, epsilon = 1e-12);

        let b = uniform_basis(1.0_f64);
        assert_relative_eq!(b[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(b[1], 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(b[2], 4.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(b[3], 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_single_segment_reference_values() {
        let points = &reference_points()[..4];
        let curve = bspline_points(points, 2).unwrap();

        assert_eq!(curve.len(), 2);
        // u = 0: (P0 + 4 P1 + P2) / 6
        assert_relative_eq!(curve[0].x, 7.0 / 6.0, epsilon = 1e-9);
        assert_relative_eq!(curve[0].y, 11.0 / 6.0, epsilon = 1e-9);
        // u = 1: (P1 + 4 P2 + P3) / 6
        assert_relative_eq!(curve[1].x, 17.0 / 6.0, epsilon = 1e-9);
        assert_relative_eq!(curve[1].y, 7.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_output_length() {
        let points = reference_points();
        let curve = bspline_points(&points, 100).unwrap();
        assert_eq!(curve.len(), 500);

        let curve = bspline_points(&points[..4], 13).unwrap();
        assert_eq!(curve.len(), 13);
    }

    #[test]
    fn test_too_few_points() {
        let points = &reference_points()[..3];
        assert_eq!(
            bspline_points(points, 10),
            Err(SplineError::TooFewControlPoints {
                required: 4,
                provided: 3
            })
        );
        assert!(UniformBSpline2::new(points.to_vec()).is_err());
    }

    #[test]
    fn test_too_few_samples() {
        let points = reference_points();
        for samples in [0, 1] {
            assert_eq!(
                bspline_points(&points, samples),
                Err(SplineError::TooFewSamples {
                    required: 2,
                    provided: samples
                })
            );
        }
    }

    #[test]
    fn test_stacked_points_collapse() {
        let p = Point2::new(2.5, -1.25);
        let points = vec![p; 4];
        for point in bspline_points(&points, 11).unwrap() {
            assert_relative_eq!(point.x, p.x, epsilon = 1e-12);
            assert_relative_eq!(point.y, p.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_does_not_interpolate_control_points() {
        let points = &reference_points()[..4];
        let curve = bspline_points(points, 2).unwrap();
        assert!(curve[0].distance(points[1]) > 0.1);
        assert!(curve[1].distance(points[2]) > 0.1);
    }

    #[test]
    fn test_segments_join() {
        let points = reference_points();
        let samples = 9;
        let curve = bspline_points(&points, samples).unwrap();

        for seg in 0..points.len() - 4 {
            let end = curve[seg * samples + samples - 1];
            let start = curve[(seg + 1) * samples];
            assert_relative_eq!(end.x, start.x, epsilon = 1e-12);
            assert_relative_eq!(end.y, start.y, epsilon = 1e-12);
        }
    }

    /// Samples both sides of every segment join at offsets 0, h, 2h.
    fn join_samples(h: f64) -> Vec<([Point2<f64>; 3], [Point2<f64>; 3])> {
        let spline = UniformBSpline2::new(reference_points()).unwrap();
        (0..spline.num_segments() - 1)
            .map(|seg| {
                let left = [
                    spline.eval(seg, 1.0).unwrap(),
                    spline.eval(seg, 1.0 - h).unwrap(),
                    spline.eval(seg, 1.0 - 2.0 * h).unwrap(),
                ];
                let right = [
                    spline.eval(seg + 1, 0.0).unwrap(),
                    spline.eval(seg + 1, h).unwrap(),
                    spline.eval(seg + 1, 2.0 * h).unwrap(),
                ];
                (left, right)
            })
            .collect()
    }

    #[test]
    fn test_first_derivative_continuity() {
        let h = 1e-5;
        for (l, r) in join_samples(h) {
            // Backward difference on the left, forward on the right.
            assert_relative_eq!((l[0].x - l[1].x) / h, (r[1].x - r[0].x) / h, epsilon = 1e-3);
            assert_relative_eq!((l[0].y - l[1].y) / h, (r[1].y - r[0].y) / h, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_second_derivative_continuity() {
        let h = 1e-4;
        for (l, r) in join_samples(h) {
            let left_x = (l[0].x - 2.0 * l[1].x + l[2].x) / (h * h);
            let right_x = (r[2].x - 2.0 * r[1].x + r[0].x) / (h * h);
            assert_relative_eq!(left_x, right_x, epsilon = 1e-2);

            let left_y = (l[0].y - 2.0 * l[1].y + l[2].y) / (h * h);
            let right_y = (r[2].y - 2.0 * r[1].y + r[0].y) / (h * h);
            assert_relative_eq!(left_y, right_y, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_collinear_points_stay_on_line() {
        let points: Vec<Point2<f64>> = (0..6).map(|i| Point2::new(i as f64, 2.0 * i as f64)).collect();
        for p in bspline_points(&points, 7).unwrap() {
            assert_relative_eq!(p.y, 2.0 * p.x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_deterministic() {
        let points = reference_points();
        let a = bspline_points(&points, 37).unwrap();
        let b = bspline_points(&points, 37).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_value_type() {
        let spline = UniformBSpline2::new(reference_points()).unwrap();
        assert_eq!(spline.num_segments(), 5);
        assert!(spline.eval(5, 0.5).is_none());

        let curve = spline.sample(4).unwrap();
        assert_eq!(curve.len(), 20);
        assert_eq!(spline.eval(2, 0.0).unwrap(), curve[8]);

        // Out-of-range u clamps to the segment ends.
        assert_eq!(spline.eval(0, -3.0), spline.eval(0, 0.0));
        assert_eq!(spline.eval(0, 7.0), spline.eval(0, 1.0));
    }

    #[test]
    fn test_f32_support() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 3.0),
            Point2::new(4.0, 0.0),
        ];

        let curve = bspline_points(&points, 2).unwrap();
        assert!((curve[0].x - 7.0 / 6.0).abs() < 1e-5);
    }
}
