//! Curve sampling for uniform cubic B-splines and Catmull-Rom splines.
//!
//! Both schemes walk the control points four at a time. Every window of four
//! consecutive points is one segment, and each segment contributes exactly
//! `samples_per_segment` points to the output, so a curve over `n` control
//! points always has `(n - 3) * samples_per_segment` points.

mod bspline;
mod catmull_rom;

pub use bspline::{bspline_points, uniform_basis, UniformBSpline2};
pub use catmull_rom::{catmull_rom_knots, catmull_rom_points, CatmullRom2, CENTRIPETAL_ALPHA};

use crate::error::SplineError;
use crate::primitives::Point2;
use num_traits::Float;

/// Control points needed for a single cubic segment.
pub const MIN_CONTROL_POINTS: usize = 4;

/// Smallest usable per-segment resolution (the first and last parameter).
pub const MIN_SAMPLES_PER_SEGMENT: usize = 2;

/// Number of points a curve over `num_points` control points will contain.
///
/// Returns 0 when there are too few control points for a segment.
///
/// # Example
///
/// ```
/// use splinum::curves::expected_len;
///
/// assert_eq!(expected_len(8, 100), 500);
/// assert_eq!(expected_len(3, 100), 0);
/// ```
pub fn expected_len(num_points: usize, samples_per_segment: usize) -> usize {
    num_points.saturating_sub(MIN_CONTROL_POINTS - 1) * samples_per_segment
}

/// Checks the preconditions shared by every evaluator.
pub(crate) fn validate<F: Float>(
    points: &[Point2<F>],
    samples_per_segment: usize,
) -> Result<(), SplineError> {
    if points.len() < MIN_CONTROL_POINTS {
        return Err(SplineError::TooFewControlPoints {
            required: MIN_CONTROL_POINTS,
            provided: points.len(),
        });
    }
    if samples_per_segment < MIN_SAMPLES_PER_SEGMENT {
        return Err(SplineError::TooFewSamples {
            required: MIN_SAMPLES_PER_SEGMENT,
            provided: samples_per_segment,
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(SplineError::NonFiniteControlPoint { index });
    }
    Ok(())
}

/// Normalized parameter of sample `j`, spanning `[0, 1]` inclusive.
#[inline]
pub(crate) fn sample_parameter<F: Float>(j: usize, samples_per_segment: usize) -> F {
    F::from(j).unwrap() / F::from(samples_per_segment - 1).unwrap()
}

/// The interpolation scheme used to turn control points into a curve.
///
/// This is the single entry point shared by the batch writer and the
/// interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SplineKind<F> {
    /// Uniform cubic B-spline (approximating, C2).
    #[default]
    BSpline,
    /// Catmull-Rom with knot spacing `distance^alpha` (interpolating).
    CatmullRom {
        /// 0.0 = uniform, 0.5 = centripetal, 1.0 = chordal
        alpha: F,
    },
}

impl<F: Float> SplineKind<F> {
    /// Centripetal Catmull-Rom (alpha = 0.5).
    pub fn centripetal() -> Self {
        SplineKind::CatmullRom {
            alpha: F::from(CENTRIPETAL_ALPHA).unwrap(),
        }
    }

    /// Human-readable name of the scheme.
    pub fn name(&self) -> &'static str {
        match self {
            SplineKind::BSpline => "B-Spline",
            SplineKind::CatmullRom { .. } => "Catmull-Rom",
        }
    }

    /// Samples the curve through `points` with this scheme.
    ///
    /// # Example
    ///
    /// ```
    /// use splinum::{curves::SplineKind, Point2};
    ///
    /// let points = vec![
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(1.0, 2.0),
    ///     Point2::new(3.0, 3.0),
    ///     Point2::new(4.0, 0.0),
    ///     Point2::new(5.0, -1.0),
    /// ];
    ///
    /// let curve = SplineKind::centripetal().sample(&points, 10).unwrap();
    /// assert_eq!(curve.len(), 20);
    /// ```
    pub fn sample(
        self,
        points: &[Point2<F>],
        samples_per_segment: usize,
    ) -> Result<Vec<Point2<F>>, SplineError> {
        let curve = match self {
            SplineKind::BSpline => bspline_points(points, samples_per_segment)?,
            SplineKind::CatmullRom { alpha } => {
                catmull_rom_points(points, samples_per_segment, alpha)?
            }
        };
        log::debug!(
            "{}: {} control points, {} samples/segment -> {} curve points",
            self.name(),
            points.len(),
            samples_per_segment,
            curve.len()
        );
        Ok(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zigzag(n: usize) -> Vec<Point2<f64>> {
        (0..n)
            .map(|i| Point2::new(i as f64, if i % 2 == 0 { 0.0 } else { 1.5 }))
            .collect()
    }

    #[test]
    fn test_expected_len() {
        assert_eq!(expected_len(4, 2), 2);
        assert_eq!(expected_len(10, 20), 140);
        assert_eq!(expected_len(0, 20), 0);
    }

    #[test]
    fn test_output_length_both_schemes() {
        for n in [4, 5, 9] {
            for samples in [2, 3, 17] {
                let points = zigzag(n);
                for kind in [SplineKind::BSpline, SplineKind::centripetal()] {
                    let curve = kind.sample(&points, samples).unwrap();
                    assert_eq!(curve.len(), (n - 3) * samples);
                    assert_eq!(curve.len(), expected_len(n, samples));
                }
            }
        }
    }

    #[test]
    fn test_three_points_rejected_by_both_schemes() {
        let points = zigzag(3);
        for kind in [SplineKind::BSpline, SplineKind::centripetal()] {
            let err = kind.sample(&points, 10).unwrap_err();
            assert_eq!(
                err,
                SplineError::TooFewControlPoints {
                    required: 4,
                    provided: 3
                }
            );
            assert!(err.is_invalid_input());
        }
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let mut points = zigzag(5);
        points[2].y = f64::NAN;
        for kind in [SplineKind::BSpline, SplineKind::centripetal()] {
            assert_eq!(
                kind.sample(&points, 4),
                Err(SplineError::NonFiniteControlPoint { index: 2 })
            );
        }
    }

    #[test]
    fn test_dispatch_matches_direct_calls() {
        let points = zigzag(6);
        assert_eq!(
            SplineKind::BSpline.sample(&points, 7).unwrap(),
            bspline_points(&points, 7).unwrap()
        );
        assert_eq!(
            SplineKind::CatmullRom { alpha: 1.0 }.sample(&points, 7).unwrap(),
            catmull_rom_points(&points, 7, 1.0).unwrap()
        );
    }

    #[test]
    fn test_centripetal_alpha() {
        match SplineKind::<f64>::centripetal() {
            SplineKind::CatmullRom { alpha } => assert_relative_eq!(alpha, 0.5),
            other => panic!("unexpected kind {:?}", other),
        }
        assert_eq!(SplineKind::<f64>::default(), SplineKind::BSpline);
    }
}
