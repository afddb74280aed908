/// Intersection predicates between 2D shapes.
///
/// Both predicates are strict: rectangles that merely touch along an
/// edge do not intersect, while a circle touching a rectangle exactly
/// at radius distance does (squared distance <= radius squared).

use glam::Vec2;
use crate::utils::clamp;
use super::rect::Rect;

/// Test whether two axis-aligned rectangles overlap.
///
/// Standard separating-axis test on both axes. Edge-touching
/// (coordinate equality) counts as non-intersecting.
pub fn rect_intersects_rect(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right()
        && a.right() > b.left()
        && a.top() < b.bottom()
        && a.bottom() > b.top()
}

/// Test whether a circle overlaps an axis-aligned rectangle.
///
/// Clamps the circle center to the rectangle's extents to find the
/// nearest point, then compares squared distance against radius squared.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = Vec2::new(
        clamp(center.x, rect.left(), rect.right()),
        clamp(center.y, rect.top(), rect.bottom()),
    );

    (center - nearest).length_squared() <= radius * radius
}

#[cfg(test)]
#[path = "intersect_tests.rs"]
mod tests;
