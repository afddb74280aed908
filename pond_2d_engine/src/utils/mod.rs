//! Small engine utilities.

mod scalar;

pub use scalar::{lerp, clamp, random_int};
