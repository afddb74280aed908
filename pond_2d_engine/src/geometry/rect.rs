/// Rect — axis-aligned world-space rectangle.
///
/// `position` is the top-left corner; `w`/`h` extend right and down
/// (screen-oriented y axis).

use glam::Vec2;

/// Axis-aligned rectangle: top-left position plus extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner in world space
    pub position: Vec2,
    /// Width (extends right)
    pub w: f32,
    /// Height (extends down)
    pub h: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extents.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            w,
            h,
        }
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.h
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.position.x + self.w / 2.0,
            self.position.y + self.h / 2.0,
        )
    }
}
