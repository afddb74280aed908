use std::time::{Duration, Instant};
use super::*;
use crate::gameobject::Renderable;
use crate::surface::Color;

fn obj() -> Renderable {
    Renderable::rect(0.0, 0.0, 10.0, 10.0, Color::WHITE)
}

// ============================================================================
// Throttled pooling
// ============================================================================

#[test]
fn test_first_pool_always_refreshes() {
    let mut pipeline = RenderPipeline::new(Duration::from_millis(100));
    let mut list = DisplayList::new();
    let key = list.add(obj());

    let t0 = Instant::now();
    assert_eq!(pipeline.pool(&list, t0), &[key]);
}

#[test]
fn test_pool_is_throttled_within_interval() {
    let mut pipeline = RenderPipeline::new(Duration::from_millis(100));
    let mut list = DisplayList::new();
    let a = list.add(obj());

    let t0 = Instant::now();
    pipeline.pool(&list, t0);

    // a new object within the throttle window stays invisible to the
    // cached snapshot
    let b = list.add(obj());
    assert_eq!(pipeline.pool(&list, t0 + Duration::from_millis(50)), &[a]);

    // after the interval, the refresh picks it up
    assert_eq!(
        pipeline.pool(&list, t0 + Duration::from_millis(150)),
        &[a, b]
    );
}

#[test]
fn test_pool_now_bypasses_throttle() {
    let mut pipeline = RenderPipeline::new(Duration::from_secs(3600));
    let mut list = DisplayList::new();
    let a = list.add(obj());

    let t0 = Instant::now();
    pipeline.pool(&list, t0);

    let b = list.add(obj());
    pipeline.pool_now(&list);

    assert_eq!(pipeline.snapshot(), &[a, b]);
}

#[test]
fn test_zero_interval_refreshes_every_pool() {
    let mut pipeline = RenderPipeline::default();
    let mut list = DisplayList::new();
    let a = list.add(obj());

    let t0 = Instant::now();
    pipeline.pool(&list, t0);

    let b = list.add(obj());
    assert_eq!(pipeline.pool(&list, t0), &[a, b]);
}

#[test]
fn test_snapshot_tolerates_stale_keys() {
    let mut pipeline = RenderPipeline::new(Duration::from_secs(3600));
    let mut list = DisplayList::new();
    let a = list.add(obj());

    let t0 = Instant::now();
    pipeline.pool(&list, t0);
    list.remove(a);

    // the cached snapshot still holds the stale key; consumers use
    // get() which returns None for it
    assert_eq!(pipeline.snapshot(), &[a]);
    assert!(list.get(a).is_none());
}
