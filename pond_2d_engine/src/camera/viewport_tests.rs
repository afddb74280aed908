use super::*;

#[test]
fn test_default_viewport_has_unit_scale() {
    let vp = Viewport::default();
    assert_eq!(vp.scale, [1.0, 1.0]);
    assert_eq!(vp.w, 0.0);
    assert_eq!(vp.h, 0.0);
}

#[test]
fn test_world_rect_mirrors_extents() {
    let vp = Viewport {
        left: 10.0,
        top: 20.0,
        right: 110.0,
        bottom: 70.0,
        w: 100.0,
        h: 50.0,
        scale: [2.0, 2.0],
    };

    let rect = vp.world_rect();
    assert_eq!(rect.left(), 10.0);
    assert_eq!(rect.top(), 20.0);
    assert_eq!(rect.right(), 110.0);
    assert_eq!(rect.bottom(), 70.0);
}
