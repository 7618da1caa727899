//! splinum - Smooth curves through 2D control points
//!
//! Samples uniform cubic B-splines and Catmull-Rom splines (uniform,
//! centripetal or chordal) from a short sequence of control points. The
//! evaluators are pure functions; CSV output, random control points and an
//! interactive editing session are built on top of them.
//!
//! ```
//! use splinum::{curves::SplineKind, Point2};
//!
//! let points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(3.0, 3.0),
//!     Point2::new(4.0, 0.0),
//! ];
//!
//! let curve = SplineKind::BSpline.sample(&points, 100).unwrap();
//! assert_eq!(curve.len(), 100);
//! ```

pub mod config;
pub mod curves;
pub mod error;
pub mod io;
pub mod primitives;
pub mod sampling;
pub mod session;

pub use curves::{bspline_points, catmull_rom_points, SplineKind};
pub use error::SplineError;
pub use primitives::{Point2, Vec2};
