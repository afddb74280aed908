/// FrameTiming — per-frame delta measurement and smoothing.
///
/// Keeps a bounded history of recent delta times (drop-oldest ring)
/// and derives a smoothed delta as their mean. Never reset: the
/// history accumulates for the lifetime of a running loop.

use std::collections::VecDeque;
use std::time::Instant;

/// Capacity of the delta-time history ring.
pub const DELTA_HISTORY_CAPACITY: usize = 100;

/// Frame timing state owned by the game loop.
#[derive(Debug)]
pub struct FrameTiming {
    previous: Option<Instant>,
    delta: f32,
    history: VecDeque<f32>,
    smoothed: f32,
    fps: f32,
}

impl FrameTiming {
    pub fn new() -> Self {
        Self {
            previous: None,
            delta: 0.0,
            history: VecDeque::with_capacity(DELTA_HISTORY_CAPACITY),
            smoothed: 0.0,
            fps: 0.0,
        }
    }

    /// Record a tick at `now`.
    ///
    /// The first tick has no previous timestamp: delta and fps stay
    /// zero and nothing enters the history.
    pub fn update(&mut self, now: Instant) {
        if let Some(previous) = self.previous {
            self.delta = now.duration_since(previous).as_secs_f32();

            if self.history.len() == DELTA_HISTORY_CAPACITY {
                self.history.pop_front();
            }
            self.history.push_back(self.delta);

            self.smoothed = self.history.iter().sum::<f32>() / self.history.len() as f32;
            self.fps = if self.delta > 0.0 { 1.0 / self.delta } else { 0.0 };
        }
        self.previous = Some(now);
    }

    /// Seconds elapsed between the two most recent ticks.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Mean of the recorded delta history.
    pub fn smoothed_delta(&self) -> f32 {
        self.smoothed
    }

    /// Instantaneous frames per second (1 / delta).
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Number of recorded deltas (at most the ring capacity).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "timing_tests.rs"]
mod tests;
