/// RenderPipeline — throttled cache of the draw snapshot.
///
/// The loop draws from the cached depth-sorted key list rather than
/// re-sorting the display list on every tick. `pool()` refreshes the
/// cache at most once per throttle interval; culling passes call
/// `pool_now()` so visibility changes land in the very next draw.

use std::time::{Duration, Instant};
use crate::gameobject::RenderableKey;
use super::display_list::DisplayList;

/// Cached, depth-sorted draw order for one scene.
#[derive(Debug)]
pub struct RenderPipeline {
    pool_interval: Duration,
    last_pool: Option<Instant>,
    cached: Vec<RenderableKey>,
}

impl RenderPipeline {
    /// Create a pipeline refreshing at most once per `pool_interval`.
    ///
    /// An interval of zero refreshes on every `pool()` call.
    pub fn new(pool_interval: Duration) -> Self {
        Self {
            pool_interval,
            last_pool: None,
            cached: Vec::new(),
        }
    }

    /// Refresh the cached draw order if the throttle interval elapsed,
    /// then return it.
    ///
    /// Keys may go stale between refreshes; consumers must tolerate
    /// stale keys (the display list's `get` returns None for them).
    pub fn pool(&mut self, display_list: &DisplayList, now: Instant) -> &[RenderableKey] {
        let due = match self.last_pool {
            None => true,
            Some(last) => now.duration_since(last) >= self.pool_interval,
        };

        if due {
            self.cached = display_list.depth_sort();
            self.last_pool = Some(now);
        }

        &self.cached
    }

    /// Refresh the cached draw order immediately, bypassing the
    /// throttle interval.
    ///
    /// Also resets the throttle, so the next `pool()` refreshes again
    /// regardless of when the last scheduled refresh ran.
    pub fn pool_now(&mut self, display_list: &DisplayList) {
        self.cached = display_list.depth_sort();
        self.last_pool = None;
    }

    /// The current cached draw order without refreshing.
    pub fn snapshot(&self) -> &[RenderableKey] {
        &self.cached
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
