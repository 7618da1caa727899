//! Interactive editing session.
//!
//! A [`Session`] is the whole state of an interactive spline editor: the
//! control points, the drag state machine, the resolution/tension/mode
//! controls and the current curve. Handlers take the session by value and
//! return the updated one, so a GUI keeps exactly one owned value and feeds
//! every input event through it. The evaluators never see the session.
//!
//! Drag transitions:
//!
//! ```text
//! Idle --pointer down on a point--> Dragging(i)
//! Dragging(i) --pointer move--> Dragging(i)   (point i follows, curve recomputed)
//! any --pointer up--> Idle
//! ```
//!
//! # Example
//!
//! ```
//! use splinum::{Point2, session::{DragState, Session, SessionEvent}};
//!
//! let points: Vec<Point2<f64>> = (0..6)
//!     .map(|i| Point2::new(i as f64 * 40.0, if i % 2 == 0 { 0.0 } else { 40.0 }))
//!     .collect();
//!
//! let session = Session::new(points)
//!     .handle(SessionEvent::PointerDown(Some(Point2::new(42.0, 38.0))))
//!     .handle(SessionEvent::PointerMove(Some(Point2::new(40.0, 90.0))));
//!
//! assert_eq!(session.drag_state(), DragState::Dragging(1));
//! assert_eq!(session.control_points()[1], Point2::new(40.0, 90.0));
//!
//! let session = session.handle(SessionEvent::PointerUp);
//! assert_eq!(session.drag_state(), DragState::Idle);
//! ```

use crate::curves::{SplineKind, CENTRIPETAL_ALPHA, MIN_SAMPLES_PER_SEGMENT};
use crate::error::SplineError;
use crate::primitives::Point2;
use crate::sampling::{RandomWalk, DEFAULT_START};
use num_traits::Float;

/// Half-width of the square hit box around a control point, per axis.
pub const HIT_TOLERANCE: f64 = 8.0;

/// Upper end of the resolution control.
pub const MAX_SAMPLES_PER_SEGMENT: usize = 100;

/// Resolution a new session starts with.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 20;

/// Pointer drag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// No control point is held.
    Idle,
    /// The control point at this index follows the pointer.
    Dragging(usize),
}

/// Which evaluator draws the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineMode {
    BSpline,
    CatmullRom,
}

/// An input event from the hosting UI.
///
/// Pointer positions are in data coordinates; `None` means the pointer is
/// outside the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent<F> {
    PointerDown(Option<Point2<F>>),
    PointerMove(Option<Point2<F>>),
    PointerUp,
    SetSamplesPerSegment(usize),
    SetAlpha(F),
    SetMode(SplineMode),
    ToggleControlPolygon,
}

/// What a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a, F> {
    /// Sampled curve, possibly empty
    pub curve: &'a [Point2<F>],
    /// Raw control points
    pub control_points: &'a [Point2<F>],
    /// Whether the polygon through the control points is drawn
    pub show_control_polygon: bool,
}

/// State of an interactive spline editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<F> {
    control_points: Vec<Point2<F>>,
    drag: DragState,
    samples_per_segment: usize,
    alpha: F,
    mode: SplineMode,
    show_control_polygon: bool,
    curve: Vec<Point2<F>>,
    last_error: Option<SplineError>,
}

impl<F: Float> Session<F> {
    /// Creates a session in B-spline mode with 20 samples per segment,
    /// centripetal alpha and the control polygon visible.
    pub fn new(control_points: Vec<Point2<F>>) -> Self {
        let session = Self {
            control_points,
            drag: DragState::Idle,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            alpha: F::from(CENTRIPETAL_ALPHA).unwrap(),
            mode: SplineMode::BSpline,
            show_control_polygon: true,
            curve: Vec::new(),
            last_error: None,
        };
        session.recompute()
    }

    /// Applies one input event.
    pub fn handle(self, event: SessionEvent<F>) -> Self {
        match event {
            SessionEvent::PointerDown(pos) => self.pointer_down(pos),
            SessionEvent::PointerMove(pos) => self.pointer_move(pos),
            SessionEvent::PointerUp => self.pointer_up(),
            SessionEvent::SetSamplesPerSegment(n) => self.set_samples_per_segment(n),
            SessionEvent::SetAlpha(alpha) => self.set_alpha(alpha),
            SessionEvent::SetMode(mode) => self.set_mode(mode),
            SessionEvent::ToggleControlPolygon => self.toggle_control_polygon(),
        }
    }

    /// Starts dragging the first control point whose hit box contains `pos`.
    ///
    /// A press that hits nothing leaves the drag state unchanged.
    pub fn pointer_down(mut self, pos: Option<Point2<F>>) -> Self {
        if let Some(index) = pos.and_then(|pos| self.hit_test(pos)) {
            log::trace!("grabbed control point {}", index);
            self.drag = DragState::Dragging(index);
        }
        self
    }

    /// Moves the held control point to `pos` and redraws.
    pub fn pointer_move(mut self, pos: Option<Point2<F>>) -> Self {
        match (self.drag, pos) {
            (DragState::Dragging(index), Some(pos)) if index < self.control_points.len() => {
                self.control_points[index] = pos;
                self.recompute()
            }
            _ => self,
        }
    }

    /// Releases any held control point.
    pub fn pointer_up(mut self) -> Self {
        self.drag = DragState::Idle;
        self
    }

    /// Sets the resolution, clamped to `[2, 100]`.
    pub fn set_samples_per_segment(mut self, samples: usize) -> Self {
        self.samples_per_segment = samples.clamp(MIN_SAMPLES_PER_SEGMENT, MAX_SAMPLES_PER_SEGMENT);
        self.recompute()
    }

    /// Sets the Catmull-Rom tension, clamped to `[0, 1]`.
    ///
    /// NaN is ignored. The curve only changes in Catmull-Rom mode.
    pub fn set_alpha(mut self, alpha: F) -> Self {
        if alpha.is_nan() {
            return self;
        }
        self.alpha = alpha.max(F::zero()).min(F::one());
        match self.mode {
            SplineMode::CatmullRom => self.recompute(),
            SplineMode::BSpline => self,
        }
    }

    /// Switches the evaluator.
    pub fn set_mode(mut self, mode: SplineMode) -> Self {
        self.mode = mode;
        self.recompute()
    }

    /// Shows or hides the control polygon.
    pub fn toggle_control_polygon(mut self) -> Self {
        self.show_control_polygon = !self.show_control_polygon;
        self
    }

    /// Index of the first control point within [`HIT_TOLERANCE`] of `pos` on
    /// both axes.
    pub fn hit_test(&self, pos: Point2<F>) -> Option<usize> {
        let tolerance = F::from(HIT_TOLERANCE).unwrap();
        self.control_points
            .iter()
            .position(|p| (pos.x - p.x).abs() < tolerance && (pos.y - p.y).abs() < tolerance)
    }

    /// The scheme the current controls select.
    pub fn spline_kind(&self) -> SplineKind<F> {
        match self.mode {
            SplineMode::BSpline => SplineKind::BSpline,
            SplineMode::CatmullRom => SplineKind::CatmullRom { alpha: self.alpha },
        }
    }

    // Keeps the previous curve when the new state cannot be evaluated, e.g.
    // a point dropped exactly onto its neighbour in Catmull-Rom mode.
    fn recompute(mut self) -> Self {
        match self
            .spline_kind()
            .sample(&self.control_points, self.samples_per_segment)
        {
            Ok(curve) => {
                self.curve = curve;
                self.last_error = None;
            }
            Err(SplineError::TooFewControlPoints { .. }) => {
                self.curve.clear();
                self.last_error = None;
            }
            Err(err) => {
                log::debug!("keeping previous curve: {}", err);
                self.last_error = Some(err);
            }
        }
        self
    }

    /// Borrowed view of everything a renderer draws.
    pub fn frame(&self) -> Frame<'_, F> {
        Frame {
            curve: &self.curve,
            control_points: &self.control_points,
            show_control_polygon: self.show_control_polygon,
        }
    }

    pub fn control_points(&self) -> &[Point2<F>] {
        &self.control_points
    }

    pub fn curve(&self) -> &[Point2<F>] {
        &self.curve
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn samples_per_segment(&self) -> usize {
        self.samples_per_segment
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn mode(&self) -> SplineMode {
        self.mode
    }

    pub fn show_control_polygon(&self) -> bool {
        self.show_control_polygon
    }

    /// Why the last recompute was rejected, if it was.
    pub fn last_error(&self) -> Option<&SplineError> {
        self.last_error.as_ref()
    }
}

impl Session<f64> {
    /// Creates a session over a random walk of ten points starting at
    /// (250, 250).
    pub fn with_random_points(seed: u64) -> Self {
        let start = Point2::new(DEFAULT_START.0, DEFAULT_START.1);
        Self::new(RandomWalk::new(seed).generate(start))
    }
}
