use std::time::{Duration, Instant};
use super::*;

// ============================================================================
// Delta measurement
// ============================================================================

#[test]
fn test_first_tick_has_zero_delta_and_empty_history() {
    let mut timing = FrameTiming::new();
    timing.update(Instant::now());

    assert_eq!(timing.delta(), 0.0);
    assert_eq!(timing.fps(), 0.0);
    assert_eq!(timing.history_len(), 0);
}

#[test]
fn test_delta_measures_elapsed_seconds() {
    let mut timing = FrameTiming::new();
    let t0 = Instant::now();

    timing.update(t0);
    timing.update(t0 + Duration::from_millis(16));

    assert!((timing.delta() - 0.016).abs() < 1e-6);
    assert!((timing.fps() - 62.5).abs() < 0.01);
    assert_eq!(timing.history_len(), 1);
}

#[test]
fn test_zero_delta_reports_zero_fps() {
    let mut timing = FrameTiming::new();
    let t0 = Instant::now();

    timing.update(t0);
    timing.update(t0);

    assert_eq!(timing.delta(), 0.0);
    assert_eq!(timing.fps(), 0.0);
}

// ============================================================================
// History ring
// ============================================================================

#[test]
fn test_history_is_bounded_and_drops_oldest() {
    let mut timing = FrameTiming::new();
    let t0 = Instant::now();
    timing.update(t0);

    // 150 measured deltas of 10ms each
    let mut now = t0;
    for _ in 0..150 {
        now += Duration::from_millis(10);
        timing.update(now);
    }

    assert_eq!(timing.history_len(), DELTA_HISTORY_CAPACITY);
}

#[test]
fn test_smoothed_delta_is_history_mean() {
    let mut timing = FrameTiming::new();
    let t0 = Instant::now();
    timing.update(t0);

    // two deltas: 10ms and 30ms -> mean 20ms
    timing.update(t0 + Duration::from_millis(10));
    timing.update(t0 + Duration::from_millis(40));

    assert!((timing.smoothed_delta() - 0.02).abs() < 1e-6);
}

#[test]
fn test_smoothing_converges_after_spike() {
    let mut timing = FrameTiming::new();
    let t0 = Instant::now();
    timing.update(t0);

    let mut now = t0;
    // a single 500ms spike followed by steady 10ms frames
    now += Duration::from_millis(500);
    timing.update(now);
    for _ in 0..DELTA_HISTORY_CAPACITY {
        now += Duration::from_millis(10);
        timing.update(now);
    }

    // the spike has rolled out of the ring
    assert!((timing.smoothed_delta() - 0.01).abs() < 1e-4);
}
