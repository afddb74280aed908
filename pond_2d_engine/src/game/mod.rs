//! Game module — configuration, frame timing, and the loop itself.

mod timing;
mod config;
mod game;

pub use timing::{FrameTiming, DELTA_HISTORY_CAPACITY};
pub use config::GameConfig;
pub use game::{Game, LoopState, LoopControl};
