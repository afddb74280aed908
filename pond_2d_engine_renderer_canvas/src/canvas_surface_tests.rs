use pond_2d_engine::surface::{Surface, Blend, Color};
use super::*;

// ============================================================================
// Buffer management
// ============================================================================

#[test]
fn test_new_canvas_is_transparent() {
    let canvas = CanvasSurface::new(4, 4);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(canvas.pixel_at(x, y), Color::TRANSPARENT);
        }
    }
}

#[test]
fn test_clear_fills_every_pixel() {
    let mut canvas = CanvasSurface::new(4, 4);
    canvas.clear(Color::rgb(10, 20, 30));

    assert_eq!(canvas.pixel_at(0, 0), Color::rgb(10, 20, 30));
    assert_eq!(canvas.pixel_at(3, 3), Color::rgb(10, 20, 30));
}

#[test]
fn test_set_size_resets_contents() {
    let mut canvas = CanvasSurface::new(4, 4);
    canvas.clear(Color::WHITE);

    canvas.set_size(8, 2);

    assert_eq!(canvas.width(), 8);
    assert_eq!(canvas.height(), 2);
    assert_eq!(canvas.pixel_at(0, 0), Color::TRANSPARENT);
}

#[test]
fn test_data_is_rgba_bytes() {
    let mut canvas = CanvasSurface::new(2, 1);
    canvas.clear(Color::rgba(1, 2, 3, 4));

    assert_eq!(canvas.data(), &[1, 2, 3, 4, 1, 2, 3, 4]);
}

#[test]
fn test_pixel_at_out_of_bounds_is_transparent() {
    let canvas = CanvasSurface::new(2, 2);
    assert_eq!(canvas.pixel_at(5, 0), Color::TRANSPARENT);
}

// ============================================================================
// Rect fills and the transform stack
// ============================================================================

#[test]
fn test_fill_rect_identity_transform() {
    let mut canvas = CanvasSurface::new(8, 8);
    canvas.fill_rect(2.0, 2.0, 3.0, 2.0, Color::WHITE);

    assert_eq!(canvas.pixel_at(2, 2), Color::WHITE);
    assert_eq!(canvas.pixel_at(4, 3), Color::WHITE);
    // exclusive right/bottom edges
    assert_eq!(canvas.pixel_at(5, 2), Color::TRANSPARENT);
    assert_eq!(canvas.pixel_at(2, 4), Color::TRANSPARENT);
    // untouched elsewhere
    assert_eq!(canvas.pixel_at(0, 0), Color::TRANSPARENT);
}

#[test]
fn test_fill_rect_is_clipped_to_canvas() {
    let mut canvas = CanvasSurface::new(4, 4);
    canvas.fill_rect(-10.0, -10.0, 100.0, 100.0, Color::WHITE);

    assert_eq!(canvas.pixel_at(0, 0), Color::WHITE);
    assert_eq!(canvas.pixel_at(3, 3), Color::WHITE);
}

#[test]
fn test_scale_then_translate_matches_camera_bracket() {
    // the camera emits scale(s) then translate(-left, -top):
    // world (10, 10) with left=top=10 and scale 2 lands at (0, 0)
    let mut canvas = CanvasSurface::new(16, 16);
    canvas.scale(2.0, 2.0);
    canvas.translate(-10.0, -10.0);

    canvas.fill_rect(10.0, 10.0, 4.0, 4.0, Color::WHITE);

    assert_eq!(canvas.pixel_at(0, 0), Color::WHITE);
    assert_eq!(canvas.pixel_at(7, 7), Color::WHITE);
    assert_eq!(canvas.pixel_at(8, 8), Color::TRANSPARENT);
}

#[test]
fn test_save_restore_round_trips_transform() {
    let mut canvas = CanvasSurface::new(8, 8);

    canvas.save();
    canvas.scale(4.0, 4.0);
    canvas.translate(100.0, 100.0);
    canvas.restore();

    // back to identity
    canvas.fill_rect(1.0, 1.0, 1.0, 1.0, Color::WHITE);
    assert_eq!(canvas.pixel_at(1, 1), Color::WHITE);
}

#[test]
fn test_restore_on_empty_stack_is_a_no_op() {
    let mut canvas = CanvasSurface::new(4, 4);
    canvas.restore();

    canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Color::WHITE);
    assert_eq!(canvas.pixel_at(0, 0), Color::WHITE);
}

#[test]
fn test_restore_also_reverts_blend_mode() {
    let mut canvas = CanvasSurface::new(4, 4);

    canvas.save();
    canvas.set_blend(Blend::Lighter);
    canvas.restore();

    // SourceOver again: an opaque fill replaces the destination
    canvas.clear(Color::rgb(200, 200, 200));
    canvas.fill_rect(0.0, 0.0, 1.0, 1.0, Color::rgb(10, 10, 10));
    assert_eq!(canvas.pixel_at(0, 0), Color::rgb(10, 10, 10));
}

// ============================================================================
// Blending
// ============================================================================

#[test]
fn test_source_over_alpha_blend() {
    let mut canvas = CanvasSurface::new(2, 2);
    canvas.clear(Color::BLACK);

    canvas.fill_rect(0.0, 0.0, 2.0, 2.0, Color::WHITE.with_alpha(0.5));

    let px = canvas.pixel_at(0, 0);
    // half white over black: channels land near 128
    assert!((px.r as i32 - 128).abs() <= 1);
    assert!((px.g as i32 - 128).abs() <= 1);
    assert!((px.b as i32 - 128).abs() <= 1);
    assert_eq!(px.a, 255);
}

#[test]
fn test_lighter_blend_adds_and_saturates() {
    let mut canvas = CanvasSurface::new(2, 2);
    canvas.clear(Color::rgb(200, 200, 0));

    canvas.set_blend(Blend::Lighter);
    canvas.fill_rect(0.0, 0.0, 2.0, 2.0, Color::rgb(100, 40, 10));

    let px = canvas.pixel_at(0, 0);
    assert_eq!(px.r, 255); // 200 + 100 saturates
    assert_eq!(px.g, 240);
    assert_eq!(px.b, 10);
}

// ============================================================================
// Circles and round rects
// ============================================================================

#[test]
fn test_fill_circle_covers_center_not_bbox_corners() {
    let mut canvas = CanvasSurface::new(16, 16);
    canvas.fill_circle(8.0, 8.0, 5.0, Color::WHITE);

    assert_eq!(canvas.pixel_at(8, 8), Color::WHITE);
    assert_eq!(canvas.pixel_at(8, 4), Color::WHITE);
    // bbox corner stays empty
    assert_eq!(canvas.pixel_at(3, 3), Color::TRANSPARENT);
    assert_eq!(canvas.pixel_at(12, 12), Color::TRANSPARENT);
}

#[test]
fn test_fill_circle_scales_into_ellipse() {
    let mut canvas = CanvasSurface::new(32, 16);
    canvas.scale(2.0, 1.0);

    canvas.fill_circle(8.0, 8.0, 4.0, Color::WHITE);

    // stretched horizontally: x spans ~[8, 24), y spans ~[4, 12)
    assert_eq!(canvas.pixel_at(16, 8), Color::WHITE);
    assert_eq!(canvas.pixel_at(9, 8), Color::WHITE);
    assert_eq!(canvas.pixel_at(16, 5), Color::WHITE);
    assert_eq!(canvas.pixel_at(9, 5), Color::TRANSPARENT);
}

#[test]
fn test_fill_round_rect_rounds_corners_only() {
    let mut canvas = CanvasSurface::new(16, 16);
    canvas.fill_round_rect(2.0, 2.0, 12.0, 12.0, 4.0, Color::WHITE);

    // center and edge midpoints filled
    assert_eq!(canvas.pixel_at(8, 8), Color::WHITE);
    assert_eq!(canvas.pixel_at(8, 2), Color::WHITE);
    assert_eq!(canvas.pixel_at(2, 8), Color::WHITE);
    // extreme corner pixel is outside the rounding ellipse
    assert_eq!(canvas.pixel_at(2, 2), Color::TRANSPARENT);
}

#[test]
fn test_fill_round_rect_zero_radius_is_a_rect() {
    let mut canvas = CanvasSurface::new(8, 8);
    canvas.fill_round_rect(1.0, 1.0, 4.0, 4.0, 0.0, Color::WHITE);

    assert_eq!(canvas.pixel_at(1, 1), Color::WHITE);
    assert_eq!(canvas.pixel_at(4, 4), Color::WHITE);
    assert_eq!(canvas.pixel_at(5, 5), Color::TRANSPARENT);
}
