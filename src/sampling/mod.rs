//! Control point generation.

mod random_walk;

pub use random_walk::{
    random_walk, seeded_random_walk, RandomWalk, DEFAULT_START, DEFAULT_STEPS, DEFAULT_STEP_LENGTH,
};
