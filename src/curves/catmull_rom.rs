//! Catmull-Rom splines with alpha parameterization.
//!
//! Catmull-Rom splines are C1-continuous interpolating splines. Each window of
//! four consecutive control points `p0..p3` produces the curve piece between
//! `p1` and `p2`, so the curve passes through every control point except the
//! first and the last.
//!
//! # Example
//!
//! ```
//! use splinum::{Point2, curves::catmull_rom_points};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 0.5),
//!     Point2::new(3.0, 1.0),
//! ];
//!
//! let curve = catmull_rom_points(&points, 20, 0.5).unwrap();
//! assert!((curve[0].x - 1.0).abs() < 1e-9);
//! assert!((curve[19].x - 2.0).abs() < 1e-9);
//! ```
//!
//! # Parameterization
//!
//! Knots are spaced by `distance(p_k, p_k+1)^alpha`:
//! - `alpha = 0.0`: Uniform (standard Catmull-Rom)
//! - `alpha = 0.5`: Centripetal (avoids cusps and self-intersections)
//! - `alpha = 1.0`: Chordal

use super::{sample_parameter, validate, MIN_CONTROL_POINTS};
use crate::error::SplineError;
use crate::primitives::Point2;
use num_traits::Float;

/// Alpha of the centripetal parameterization.
pub const CENTRIPETAL_ALPHA: f64 = 0.5;

/// Samples a Catmull-Rom spline through `points`.
///
/// For every window of four consecutive points, `samples_per_segment` points
/// are produced with the global parameter running from `t1` to `t2`
/// inclusive. The first sample of a segment is therefore `p1` and the last is
/// `p2`. The result has `(n - 3) * samples_per_segment` points.
///
/// # Errors
///
/// Besides the checks shared with [`bspline_points`](super::bspline_points),
/// returns [`SplineError::AlphaOutOfRange`] when `alpha` is not in `[0, 1]`
/// and [`SplineError::CoincidentPoints`] when a window's knots are not
/// strictly increasing, either because two consecutive points coincide or
/// because a chord is too short to register next to its neighbours. All checks
/// run before any point is computed.
pub fn catmull_rom_points<F: Float>(
    points: &[Point2<F>],
    samples_per_segment: usize,
    alpha: F,
) -> Result<Vec<Point2<F>>, SplineError> {
    validate(points, samples_per_segment)?;
    check_alpha(alpha)?;

    let mut segments = Vec::with_capacity(points.len() - (MIN_CONTROL_POINTS - 1));
    for (start, window) in points.windows(MIN_CONTROL_POINTS).enumerate() {
        let window = [window[0], window[1], window[2], window[3]];
        let knots = catmull_rom_knots(window, alpha);
        check_knots(knots).map_err(|k| SplineError::CoincidentPoints { index: start + k })?;
        segments.push((window, knots));
    }

    let mut curve = Vec::with_capacity(super::expected_len(points.len(), samples_per_segment));
    for (window, knots) in segments {
        for j in 0..samples_per_segment {
            let s: F = sample_parameter(j, samples_per_segment);
            let t = knots[1] + s * (knots[2] - knots[1]);
            curve.push(CatmullRom2::eval_segment(window, knots, t));
        }
    }

    Ok(curve)
}

/// Computes the knot sequence `[t0, t1, t2, t3]` of one window.
///
/// `t0 = 0` and `t_{k+1} = t_k + distance(p_k, p_{k+1})^alpha`. With
/// `alpha = 0` the knots are `0, 1, 2, 3` whatever the geometry.
pub fn catmull_rom_knots<F: Float>(window: [Point2<F>; 4], alpha: F) -> [F; 4] {
    let t0 = F::zero();
    let t1 = t0 + knot_interval(window[0], window[1], alpha);
    let t2 = t1 + knot_interval(window[1], window[2], alpha);
    let t3 = t2 + knot_interval(window[2], window[3], alpha);
    [t0, t1, t2, t3]
}

#[inline]
fn knot_interval<F: Float>(a: Point2<F>, b: Point2<F>, alpha: F) -> F {
    a.distance(b).powf(alpha)
}

/// Requires `t0 < t1 < t2 < t3`, all finite.
///
/// On failure returns the offset within the window of the first point of the
/// collapsed interval. An interval can collapse either because two points
/// coincide or because a short chord is absorbed when added to a long one.
fn check_knots<F: Float>(knots: [F; 4]) -> Result<(), usize> {
    for k in 0..3 {
        let (lo, hi) = (knots[k], knots[k + 1]);
        if !(lo < hi) || !hi.is_finite() {
            return Err(k);
        }
    }
    Ok(())
}

fn check_alpha<F: Float>(alpha: F) -> Result<(), SplineError> {
    if alpha >= F::zero() && alpha <= F::one() {
        Ok(())
    } else {
        Err(SplineError::AlphaOutOfRange)
    }
}

/// Affine blend of `a` at knot `ta` and `b` at knot `tb`, evaluated at `t`.
#[inline]
fn blend<F: Float>(a: Point2<F>, b: Point2<F>, ta: F, tb: F, t: F) -> Point2<F> {
    let span = tb - ta;
    let wa = (tb - t) / span;
    let wb = (t - ta) / span;
    Point2::new(wa * a.x + wb * b.x, wa * a.y + wb * b.y)
}

/// A Catmull-Rom spline in 2D.
///
/// Owns its control points and tension parameter; sampling goes through
/// [`catmull_rom_points`].
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom2<F> {
    /// Control points; the curve runs from the second to the second-to-last
    pub points: Vec<Point2<F>>,
    /// Tension parameter (0.0 = uniform, 0.5 = centripetal, 1.0 = chordal)
    pub alpha: F,
}

impl<F: Float> CatmullRom2<F> {
    /// Creates a Catmull-Rom spline with a custom tension parameter.
    ///
    /// # Errors
    ///
    /// Fails with [`SplineError::TooFewControlPoints`] for fewer than 4 points
    /// and [`SplineError::AlphaOutOfRange`] for alpha outside `[0, 1]`.
    pub fn new(points: Vec<Point2<F>>, alpha: F) -> Result<Self, SplineError> {
        if points.len() < MIN_CONTROL_POINTS {
            return Err(SplineError::TooFewControlPoints {
                required: MIN_CONTROL_POINTS,
                provided: points.len(),
            });
        }
        check_alpha(alpha)?;
        Ok(Self { points, alpha })
    }

    /// Creates a centripetal Catmull-Rom spline (alpha = 0.5).
    ///
    /// Centripetal parameterization avoids cusps and self-intersections,
    /// making it the preferred choice for most applications.
    pub fn centripetal(points: Vec<Point2<F>>) -> Result<Self, SplineError> {
        Self::new(points, F::from(CENTRIPETAL_ALPHA).unwrap())
    }

    /// Creates a uniform Catmull-Rom spline (alpha = 0.0).
    pub fn uniform(points: Vec<Point2<F>>) -> Result<Self, SplineError> {
        Self::new(points, F::zero())
    }

    /// Creates a chordal Catmull-Rom spline (alpha = 1.0).
    pub fn chordal(points: Vec<Point2<F>>) -> Result<Self, SplineError> {
        Self::new(points, F::one())
    }

    /// Returns the number of spline segments (`n - 3`).
    pub fn num_segments(&self) -> usize {
        self.points.len().saturating_sub(MIN_CONTROL_POINTS - 1)
    }

    /// Knot sequence of `segment`, or `None` if out of range.
    pub fn segment_knots(&self, segment: usize) -> Option<[F; 4]> {
        if segment >= self.num_segments() {
            return None;
        }
        let p = &self.points[segment..segment + MIN_CONTROL_POINTS];
        Some(catmull_rom_knots([p[0], p[1], p[2], p[3]], self.alpha))
    }

    /// Evaluates one window at global parameter `t` (Barry and Goldman's
    /// pyramidal formulation).
    ///
    /// The knots must be strictly increasing; [`catmull_rom_points`] checks
    /// this before calling here.
    pub fn eval_segment(window: [Point2<F>; 4], knots: [F; 4], t: F) -> Point2<F> {
        let [p0, p1, p2, p3] = window;
        let [t0, t1, t2, t3] = knots;

        let a1 = blend(p0, p1, t0, t1, t);
        let a2 = blend(p1, p2, t1, t2, t);
        let a3 = blend(p2, p3, t2, t3, t);

        let b1 = blend(a1, a2, t0, t2, t);
        let b2 = blend(a2, a3, t1, t3, t);

        blend(b1, b2, t1, t2, t)
    }

    /// Samples the whole curve. See [`catmull_rom_points`].
    pub fn sample(&self, samples_per_segment: usize) -> Result<Vec<Point2<F>>, SplineError> {
        catmull_rom_points(&self.points, samples_per_segment, self.alpha)
    }
}
