//! Random-walk control points.
//!
//! Each step moves a fixed distance from the previous point in a direction
//! drawn from 72 headings `k * 5` for `k` in `0..=71`. The heading value is
//! used directly as an angle in radians, so the 72 headings are not evenly
//! spread around the circle; walks keep that distribution so that seeded
//! outputs stay comparable with earlier ones.
//!
//! # Example
//!
//! ```
//! use splinum::{Point2, sampling::seeded_random_walk};
//!
//! let points: Vec<Point2<f64>> = seeded_random_walk(7, Point2::new(250.0, 250.0), 9, 30.0);
//! assert_eq!(points.len(), 10);
//!
//! for pair in points.windows(2) {
//!     assert!((pair[0].distance(pair[1]) - 30.0).abs() < 1e-9);
//! }
//! ```

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Starting point of the demo walk.
pub const DEFAULT_START: (f64, f64) = (250.0, 250.0);

/// Steps taken by the demo walk (giving 10 control points).
pub const DEFAULT_STEPS: usize = 9;

/// Distance covered by each step of the demo walk.
pub const DEFAULT_STEP_LENGTH: f64 = 30.0;

const MAX_HEADING: u32 = 71;
const HEADING_STEP: u32 = 5;

/// Generates `steps + 1` points, starting at `start`, using `rng`.
pub fn random_walk<F: Float, R: Rng>(
    rng: &mut R,
    start: Point2<F>,
    steps: usize,
    step_length: F,
) -> Vec<Point2<F>> {
    let mut points = Vec::with_capacity(steps + 1);
    points.push(start);

    let mut current = start;
    for _ in 0..steps {
        let heading = rng.random_range(0..=MAX_HEADING) * HEADING_STEP;
        let angle = F::from(heading).unwrap();
        current = current + Vec2::from_angle(angle) * step_length;
        points.push(current);
    }

    points
}

/// Generates a reproducible random walk from `seed`.
pub fn seeded_random_walk<F: Float>(
    seed: u64,
    start: Point2<F>,
    steps: usize,
    step_length: F,
) -> Vec<Point2<F>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    random_walk(&mut rng, start, steps, step_length)
}

/// Reusable walk generator that keeps its random state between walks.
pub struct RandomWalk {
    rng: Xoshiro256PlusPlus,
    /// Number of steps per walk
    pub steps: usize,
    /// Distance covered per step
    pub step_length: f64,
}

impl RandomWalk {
    /// Creates a generator with the demo defaults and the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            steps: DEFAULT_STEPS,
            step_length: DEFAULT_STEP_LENGTH,
        }
    }

    /// Generates the next walk from `start`.
    pub fn generate(&mut self, start: Point2<f64>) -> Vec<Point2<f64>> {
        random_walk(&mut self.rng, start, self.steps, self.step_length)
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new(0)
    }
}
