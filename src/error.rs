//! Error types for spline evaluation.

use thiserror::Error;

/// Invalid input handed to a spline evaluator.
///
/// Evaluators either return a complete curve or one of these; they never
/// produce partial output.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Fewer control points than one cubic segment needs.
    #[error("not enough control points: at least {required} are required, {provided} were provided")]
    TooFewControlPoints {
        /// Minimum number of control points.
        required: usize,
        /// Number of control points supplied.
        provided: usize,
    },

    /// Per-segment resolution too small to parameterize a segment.
    #[error("not enough samples per segment: at least {required} are required, {provided} were requested")]
    TooFewSamples {
        /// Minimum samples per segment.
        required: usize,
        /// Samples per segment requested.
        provided: usize,
    },

    /// A control point has a NaN or infinite coordinate.
    #[error("control point {index} is not finite")]
    NonFiniteControlPoint {
        /// Index of the offending point.
        index: usize,
    },

    /// Catmull-Rom alpha outside `[0, 1]` or not a number.
    #[error("alpha must lie in [0, 1]")]
    AlphaOutOfRange,

    /// Two consecutive control points coincide, so their knot interval is empty.
    #[error("degenerate input: control points {index} and {} coincide", .index + 1)]
    CoincidentPoints {
        /// Index of the first point of the coincident pair.
        index: usize,
    },
}

impl SplineError {
    /// Returns `true` for errors caused by the caller's input.
    ///
    /// Every variant currently qualifies; evaluation has no other failure mode.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            SplineError::TooFewControlPoints { .. }
                | SplineError::TooFewSamples { .. }
                | SplineError::NonFiniteControlPoint { .. }
                | SplineError::AlphaOutOfRange
                | SplineError::CoincidentPoints { .. }
        )
    }
}
