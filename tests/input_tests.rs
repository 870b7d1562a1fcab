// Host-side tests for pointer state, resize debouncing and text normalization.

use glam::Vec2;
use instant::{Duration, Instant};
use swarm_core::*;

#[test]
fn pointer_is_unknown_until_first_move() {
    let mut pointer = PointerState::default();
    assert_eq!(pointer.position(), None);
    pointer.move_to(Vec2::new(3.0, 4.0));
    pointer.move_to(Vec2::new(5.0, 6.0));
    // last write wins, no smoothing
    assert_eq!(pointer.position(), Some(Vec2::new(5.0, 6.0)));
}

#[test]
fn debouncer_waits_for_quiet_period() {
    let mut d = ResizeDebouncer::new(Duration::from_millis(250));
    let t0 = Instant::now();
    assert_eq!(d.poll(t0), None);

    d.request(SurfaceSize::new(100, 100), t0);
    assert!(d.is_pending());
    assert_eq!(d.poll(t0 + Duration::from_millis(249)), None);
    assert_eq!(
        d.poll(t0 + Duration::from_millis(250)),
        Some(SurfaceSize::new(100, 100))
    );
    assert!(!d.is_pending());
    assert_eq!(d.poll(t0 + Duration::from_millis(500)), None);
}

#[test]
fn debouncer_latest_request_wins_and_restarts_window() {
    let mut d = ResizeDebouncer::new(Duration::from_millis(250));
    let t0 = Instant::now();
    d.request(SurfaceSize::new(100, 100), t0);
    d.request(SurfaceSize::new(200, 200), t0 + Duration::from_millis(200));
    // the first deadline has passed but was superseded
    assert_eq!(d.poll(t0 + Duration::from_millis(300)), None);
    assert_eq!(
        d.poll(t0 + Duration::from_millis(450)),
        Some(SurfaceSize::new(200, 200))
    );
}

#[test]
fn normalize_submission_trims_and_uppercases() {
    assert_eq!(normalize_submission("  hola  "), Some("HOLA".to_string()));
    assert_eq!(normalize_submission("Fluid Code"), Some("FLUID CODE".to_string()));
    assert_eq!(normalize_submission(""), None);
    assert_eq!(normalize_submission(" \t\n"), None);
}

#[test]
fn surface_size_helpers() {
    let s = SurfaceSize::new(800, 600);
    assert_eq!(s.center(), Vec2::new(400.0, 300.0));
    assert_eq!(s.area(), 480_000);
    assert!(!s.is_empty());
    assert!(SurfaceSize::new(0, 10).is_empty());
}
