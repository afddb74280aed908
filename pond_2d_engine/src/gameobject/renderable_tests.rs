use glam::Vec2;
use super::*;
use crate::surface::mock_surface::{MockSurface, SurfaceCall};

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_new_object_defaults() {
    let obj = Renderable::rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
    assert!(obj.visible());
    assert!(!obj.culled());
    assert!(obj.physics_enabled());
    assert_eq!(obj.z_index, 2);
    assert_eq!(obj.velocity, Vec2::ZERO);
}

#[test]
fn test_flag_toggling() {
    let mut obj = Renderable::rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);

    obj.set_visible(false);
    assert!(!obj.visible());

    obj.set_culled(true);
    assert!(obj.culled());
    // toggling one flag leaves the others alone
    assert!(!obj.visible());
    assert!(obj.physics_enabled());

    obj.set_physics_enabled(false);
    assert!(!obj.physics_enabled());
    assert!(obj.culled());
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_rect_center() {
    let obj = Renderable::rect(10.0, 20.0, 4.0, 8.0, Color::WHITE);
    assert_eq!(obj.center(), Vec2::new(12.0, 24.0));
}

#[test]
fn test_circle_center_offsets_by_radius() {
    let obj = Renderable::circle(10.0, 20.0, 5.0, Color::WHITE);
    assert_eq!(obj.center(), Vec2::new(15.0, 25.0));
}

#[test]
fn test_footprint() {
    let obj = Renderable::rect(1.0, 2.0, 3.0, 4.0, Color::WHITE);
    let fp = obj.footprint();
    assert_eq!(fp.left(), 1.0);
    assert_eq!(fp.top(), 2.0);
    assert_eq!(fp.right(), 4.0);
    assert_eq!(fp.bottom(), 6.0);
}

// ============================================================================
// Tick integration (velocity impulse)
// ============================================================================

#[test]
fn test_integrate_applies_velocity_scaled_by_delta() {
    let mut obj = Renderable::rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
    obj.set_velocity(Vec2::new(100.0, -50.0));

    obj.integrate(0.5, false);

    assert_eq!(obj.position, Vec2::new(50.0, -25.0));
}

#[test]
fn test_integrate_zeroes_velocity() {
    // velocity is a per-tick impulse, not integrated state
    let mut obj = Renderable::rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
    obj.set_velocity(Vec2::new(10.0, 10.0));

    obj.integrate(1.0, false);
    assert_eq!(obj.velocity, Vec2::ZERO);

    // a second tick without a new impulse does not move
    obj.integrate(1.0, false);
    assert_eq!(obj.position, Vec2::new(10.0, 10.0));
}

#[test]
fn test_integrate_clamps_into_bounds() {
    let mut obj = Renderable::rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
    obj.set_bounds(0.0, 0.0, 100.0, 100.0);
    obj.set_velocity(Vec2::new(500.0, -500.0));

    obj.integrate(1.0, false);

    assert_eq!(obj.position, Vec2::new(100.0, 0.0));
}

#[test]
fn test_integrate_rounds_pixels_when_configured() {
    let mut obj = Renderable::rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
    obj.set_velocity(Vec2::new(1.0, 1.0));

    obj.integrate(0.3, true);

    assert_eq!(obj.position, Vec2::new(0.0, 0.0));

    obj.set_velocity(Vec2::new(1.0, 1.0));
    obj.integrate(0.7, true);
    assert_eq!(obj.position, Vec2::new(1.0, 1.0));
}

// ============================================================================
// Drawing dispatch
// ============================================================================

#[test]
fn test_rect_draws_fill_rect() {
    let obj = Renderable::rect(1.0, 2.0, 3.0, 4.0, Color::WHITE);
    let mut surface = MockSurface::new(100, 100);

    obj.draw(&mut surface);

    assert_eq!(
        surface.calls(),
        vec![SurfaceCall::FillRect { x: 1.0, y: 2.0, w: 3.0, h: 4.0 }]
    );
}

#[test]
fn test_circle_draws_at_center() {
    let obj = Renderable::circle(10.0, 10.0, 5.0, Color::WHITE);
    let mut surface = MockSurface::new(100, 100);

    obj.draw(&mut surface);

    assert_eq!(
        surface.calls(),
        vec![SurfaceCall::FillCircle { x: 15.0, y: 15.0, r: 5.0 }]
    );
}

#[test]
fn test_round_rect_clamps_corner_radius() {
    // radius 10 against a 8x20 rect clamps to w/2 = 4
    let obj = Renderable::round_rect(0.0, 0.0, 8.0, 20.0, 10.0, Color::WHITE);
    let mut surface = MockSurface::new(100, 100);

    obj.draw(&mut surface);

    assert_eq!(
        surface.calls(),
        vec![SurfaceCall::FillRoundRect { x: 0.0, y: 0.0, w: 8.0, h: 20.0, r: 4.0 }]
    );
}

#[test]
fn test_light_draws_additively_and_restores_blend() {
    let obj = Renderable::light(0.0, 0.0, 5.0, Color::WHITE, 0.5);
    let mut surface = MockSurface::new(100, 100);

    obj.draw(&mut surface);

    assert_eq!(
        surface.calls(),
        vec![
            SurfaceCall::SetBlend(crate::surface::Blend::Lighter),
            SurfaceCall::FillCircle { x: 5.0, y: 5.0, r: 5.0 },
            SurfaceCall::SetBlend(crate::surface::Blend::SourceOver),
        ]
    );
}

#[test]
fn test_map_draws_nothing() {
    let obj = Renderable::map(0.0, 0.0, 1000.0, 1000.0);
    let mut surface = MockSurface::new(100, 100);

    obj.draw(&mut surface);

    assert!(surface.calls().is_empty());
}

// ============================================================================
// Pointer hit testing
// ============================================================================

#[test]
fn test_hit_by_screen_point() {
    // 800x600 canvas, default zoom/FOV: viewport is 1000x750 centered
    // on the origin with scale 0.8, so world (0,0) lands at (400,300).
    let camera = Camera::new(800.0, 600.0);
    let obj = Renderable::button(0.0, 0.0, 10.0, 10.0, Color::WHITE);

    assert!(obj.hit_by_screen_point(&camera, Vec2::new(405.0, 305.0)));
    assert!(!obj.hit_by_screen_point(&camera, Vec2::new(300.0, 305.0)));
}
