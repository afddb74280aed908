/// Renderable — a display object registered in a scene's display list.
///
/// Scene code creates and destroys these; the display list owns them
/// and hands out stable keys. Cameras and colliders only ever hold
/// keys, never references, so a destroyed object cannot dangle.
///
/// Velocity is an instantaneous per-tick impulse: the internal scene
/// tick applies `position += velocity * delta`, clamps the position
/// into `bounds`, then zeroes the velocity.

use glam::Vec2;
use bitflags::bitflags;
use slotmap::new_key_type;
use crate::geometry::{Rect, rect_intersects_rect};
use crate::surface::{Surface, Blend, Color};
use crate::utils::clamp;
use crate::camera::Camera;
use super::shape::{Shape, CullVolume};

new_key_type! {
    /// Stable key of a Renderable within a DisplayList.
    pub struct RenderableKey;
}

bitflags! {
    /// Per-object state toggled by culling and physics propagation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ObjectFlags: u8 {
        /// Drawn by the loop when set
        const VISIBLE = 1 << 0;
        /// Kept by the most recent culling pass
        const CULLED = 1 << 1;
        /// Physics body active
        const PHYSICS = 1 << 2;
    }
}

/// Default object bounds: effectively unbounded.
const UNBOUNDED: Rect = Rect {
    position: Vec2::new(-1_000_000.0, -1_000_000.0),
    w: 2_000_000.0,
    h: 2_000_000.0,
};

/// A drawable, cullable display object.
#[derive(Debug, Clone)]
pub struct Renderable {
    /// Shape tag driving drawing and culling dispatch
    pub shape: Shape,
    /// Top-left corner in world space (circular shapes: top-left of
    /// the bounding square, center is `position + r`)
    pub position: Vec2,
    /// Width (rect-volume shapes)
    pub w: f32,
    /// Height (rect-volume shapes)
    pub h: f32,
    /// Radius (circle-volume shapes)
    pub r: f32,
    /// Fill color
    pub fill_color: Color,
    /// Draw order; higher draws later. Ties preserve insertion order.
    pub z_index: i32,
    /// Per-tick impulse, zeroed after every internal tick
    pub velocity: Vec2,
    /// World-space region the position is clamped into each tick
    pub bounds: Rect,
    flags: ObjectFlags,
}

impl Renderable {
    /// Create a renderable of an arbitrary shape.
    pub fn new(shape: Shape, x: f32, y: f32, w: f32, h: f32, r: f32, fill_color: Color) -> Self {
        Self {
            shape,
            position: Vec2::new(x, y),
            w,
            h,
            r,
            fill_color,
            z_index: 2,
            velocity: Vec2::ZERO,
            bounds: UNBOUNDED,
            flags: ObjectFlags::VISIBLE | ObjectFlags::PHYSICS,
        }
    }

    // ===== SHAPE CONSTRUCTORS =====

    pub fn rect(x: f32, y: f32, w: f32, h: f32, fill_color: Color) -> Self {
        Self::new(Shape::Rect, x, y, w, h, 0.0, fill_color)
    }

    pub fn round_rect(x: f32, y: f32, w: f32, h: f32, r: f32, fill_color: Color) -> Self {
        Self::new(Shape::RoundRect, x, y, w, h, r, fill_color)
    }

    pub fn sprite(x: f32, y: f32, w: f32, h: f32, fill_color: Color) -> Self {
        Self::new(Shape::Sprite, x, y, w, h, 0.0, fill_color)
    }

    pub fn button(x: f32, y: f32, w: f32, h: f32, fill_color: Color) -> Self {
        Self::new(Shape::Button, x, y, w, h, 0.0, fill_color)
    }

    pub fn text(x: f32, y: f32, w: f32, h: f32, fill_color: Color) -> Self {
        Self::new(Shape::Text, x, y, w, h, 0.0, fill_color)
    }

    pub fn circle(x: f32, y: f32, r: f32, fill_color: Color) -> Self {
        Self::new(Shape::Circle, x, y, 0.0, 0.0, r, fill_color)
    }

    /// Additive-blended light disc. `alpha` in [0, 1].
    pub fn light(x: f32, y: f32, r: f32, fill_color: Color, alpha: f32) -> Self {
        Self::new(Shape::Light, x, y, 0.0, 0.0, r, fill_color.with_alpha(alpha))
    }

    pub fn particle(x: f32, y: f32, r: f32, fill_color: Color) -> Self {
        Self::new(Shape::Particle, x, y, 0.0, 0.0, r, fill_color)
    }

    pub fn map(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Shape::Map, x, y, w, h, 0.0, Color::TRANSPARENT)
    }

    // ===== FLAGS =====

    pub fn visible(&self) -> bool {
        self.flags.contains(ObjectFlags::VISIBLE)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.flags.set(ObjectFlags::VISIBLE, visible);
    }

    pub fn culled(&self) -> bool {
        self.flags.contains(ObjectFlags::CULLED)
    }

    pub fn set_culled(&mut self, culled: bool) {
        self.flags.set(ObjectFlags::CULLED, culled);
    }

    pub fn physics_enabled(&self) -> bool {
        self.flags.contains(ObjectFlags::PHYSICS)
    }

    pub fn set_physics_enabled(&mut self, enabled: bool) {
        self.flags.set(ObjectFlags::PHYSICS, enabled);
    }

    // ===== GEOMETRY =====

    /// Center of the object in world space.
    pub fn center(&self) -> Vec2 {
        match self.shape.cull_volume() {
            CullVolume::Circular => self.position + Vec2::splat(self.r),
            _ => self.position + Vec2::new(self.w / 2.0, self.h / 2.0),
        }
    }

    /// Axis-aligned footprint used by rect-volume culling and
    /// pointer hit-testing.
    pub fn footprint(&self) -> Rect {
        Rect {
            position: self.position,
            w: self.w,
            h: self.h,
        }
    }

    /// Replace the clamping bounds.
    pub fn set_bounds(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.bounds = Rect::new(x, y, w, h);
    }

    /// Set the per-tick velocity impulse.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    // ===== TICK =====

    /// Apply the velocity impulse for this tick.
    ///
    /// Moves by `velocity * delta`, clamps into `bounds`, zeroes the
    /// velocity. Called by the scene's internal tick; not meant for
    /// direct use.
    pub(crate) fn integrate(&mut self, delta: f32, round_pixels: bool) {
        self.position += self.velocity * delta;

        self.position.x = clamp(self.position.x, self.bounds.left(), self.bounds.right());
        self.position.y = clamp(self.position.y, self.bounds.top(), self.bounds.bottom());

        self.velocity = Vec2::ZERO;

        if round_pixels {
            self.position = self.position.round();
        }
    }

    // ===== DRAWING =====

    /// Draw the object onto `surface` in world coordinates.
    ///
    /// The camera's begin/end bracket supplies the world-to-screen
    /// transform; this method only issues primitives.
    pub fn draw(&self, surface: &mut dyn Surface) {
        match self.shape {
            Shape::Rect | Shape::Sprite | Shape::Button | Shape::Text => {
                surface.fill_rect(self.position.x, self.position.y, self.w, self.h, self.fill_color);
            }
            Shape::RoundRect => {
                // corner radius cannot exceed half the extents
                let mut r = self.r;
                if self.w < 2.0 * r {
                    r = self.w / 2.0;
                }
                if self.h < 2.0 * r {
                    r = self.h / 2.0;
                }
                surface.fill_round_rect(self.position.x, self.position.y, self.w, self.h, r, self.fill_color);
            }
            Shape::Circle | Shape::Particle => {
                let c = self.center();
                surface.fill_circle(c.x, c.y, self.r, self.fill_color);
            }
            Shape::Light => {
                let c = self.center();
                surface.set_blend(Blend::Lighter);
                surface.fill_circle(c.x, c.y, self.r, self.fill_color);
                surface.set_blend(Blend::SourceOver);
            }
            Shape::Map => {
                // tile content is drawn by external map collaborators
            }
        }
    }

    // ===== INPUT =====

    /// Test whether a screen-space pointer position hits this object.
    ///
    /// The object position is transformed through the camera; the
    /// pointer is treated as a 1x1 rectangle.
    pub fn hit_by_screen_point(&self, camera: &Camera, point: Vec2) -> bool {
        let screen = camera.world_to_screen(self.position);
        let footprint = Rect::new(screen.x, screen.y, self.w, self.h);
        let pointer = Rect::new(point.x, point.y, 1.0, 1.0);
        rect_intersects_rect(&footprint, &pointer)
    }
}

#[cfg(test)]
#[path = "renderable_tests.rs"]
mod tests;
