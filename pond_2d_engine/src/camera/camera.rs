/// Camera — viewport, transforms, follow, effects, and culling.
///
/// The camera keeps a look-at point in world space and derives its
/// viewport from field of view, distance (zoom), and the canvas size
/// pushed in by the owning Game. Culling is a camera concern: both the
/// explicit and the automatic (frustum) strategies partition a display
/// list's objects and propagate visibility + physics flags.

use std::time::{Duration, Instant};
use glam::Vec2;
use rustc_hash::FxHashSet;
use crate::engine_debug;
use crate::engine_error;
use crate::engine_info;
use crate::engine_warn;
use crate::error::Result;
use crate::geometry::{Rect, rect_intersects_rect, circle_intersects_rect};
use crate::gameobject::{RenderableKey, Shape, CullVolume};
use crate::scene::{DisplayList, RenderPipeline};
use crate::surface::Surface;
use crate::utils::{lerp, random_int};
use super::viewport::Viewport;
use super::effects::{SmoothEffect, ShakeEffect};

/// Options controlling how a culling pass toggles object state.
#[derive(Debug, Clone, Copy)]
pub struct CullingOptions {
    /// When true (default), the pass toggles the `culled` flag and
    /// leaves `visible` alone; when false it toggles `visible`.
    pub preserve_visibility: bool,
    /// When true (default), the pass also toggles the physics-enabled
    /// flag on every partitioned object.
    pub modify_physics_enable: bool,
}

impl Default for CullingOptions {
    fn default() -> Self {
        Self {
            preserve_visibility: true,
            modify_physics_enable: true,
        }
    }
}

/// A 2D camera over a scene's display list.
#[derive(Debug, Clone)]
pub struct Camera {
    look_at: Vec2,
    field_of_view: f32,
    distance: f32,
    viewport: Viewport,

    canvas_width: f32,
    canvas_height: f32,
    dpr: f32,
    dpr_scale: bool,
    debug: bool,

    following: Option<RenderableKey>,
    lerp_x: f32,
    lerp_y: f32,
    bounds: Option<Rect>,

    zoom_effect: Option<SmoothEffect>,
    fov_effect: Option<SmoothEffect>,
    shake_effect: Option<ShakeEffect>,
}

impl Camera {
    /// Default zoom distance.
    pub const DEFAULT_DISTANCE: f32 = 1000.0;

    /// Default field of view in radians.
    pub const DEFAULT_FOV: f32 = std::f32::consts::FRAC_PI_4;

    /// Create a camera for a canvas of the given pixel size.
    ///
    /// The owning Game keeps the size in sync through
    /// `on_canvas_resize`.
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        let mut camera = Self {
            look_at: Vec2::ZERO,
            field_of_view: Self::DEFAULT_FOV,
            distance: Self::DEFAULT_DISTANCE,
            viewport: Viewport::default(),
            canvas_width,
            canvas_height,
            dpr: 1.0,
            dpr_scale: false,
            debug: false,
            following: None,
            lerp_x: 1.0,
            lerp_y: 1.0,
            bounds: None,
            zoom_effect: None,
            fov_effect: None,
            shake_effect: None,
        };
        camera.update_viewport();
        camera
    }

    // ===== GETTERS =====

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn look_at(&self) -> Vec2 {
        self.look_at
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn following(&self) -> Option<RenderableKey> {
        self.following
    }

    /// Default zoom, accounting for device-pixel-ratio scaling when
    /// enabled.
    pub fn default_zoom(&self) -> f32 {
        if self.dpr_scale {
            if self.debug {
                engine_info!(
                    "pond2d::Camera",
                    "default_zoom returned default zoom with dpr scaling"
                );
            }
            Self::DEFAULT_DISTANCE / self.dpr
        } else {
            Self::DEFAULT_DISTANCE
        }
    }

    pub fn default_fov(&self) -> f32 {
        Self::DEFAULT_FOV
    }

    // ===== CONFIGURATION =====

    /// Adopt the owning Game's configuration flags.
    pub(crate) fn apply_config(&mut self, dpr_scale: bool, debug: bool) {
        self.dpr_scale = dpr_scale;
        self.debug = debug;
        self.update_viewport();
    }

    /// Adopt a new canvas size and device pixel ratio.
    ///
    /// Called by the owning Game's resize path; there is no global
    /// resize hook.
    pub fn on_canvas_resize(&mut self, width: f32, height: f32, dpr: f32) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        self.update_viewport();
    }

    // ===== VIEWPORT =====

    /// Recompute the viewport from distance, field of view, look-at,
    /// and canvas size.
    ///
    /// Called internally after every mutation of zoom, FOV, or
    /// look-at. With a degenerate canvas the recompute is skipped and
    /// the error is logged; the previous viewport stays in place.
    pub fn update_viewport(&mut self) {
        let (cw, ch) = if self.dpr_scale && self.dpr != 1.0 {
            // dpr scaling works in logical pixels and pins the zoom
            self.distance = Self::DEFAULT_DISTANCE / self.dpr;
            (self.canvas_width / self.dpr, self.canvas_height / self.dpr)
        } else {
            (self.canvas_width, self.canvas_height)
        };

        if cw <= 0.0 || ch <= 0.0 {
            engine_error!(
                "pond2d::Camera",
                "Cannot update camera viewport: render context unavailable ({}x{})",
                cw,
                ch
            );
            return;
        }

        let aspect_ratio = cw / ch;
        let w = self.distance * self.field_of_view.tan();
        let h = w / aspect_ratio;

        self.viewport.w = w;
        self.viewport.h = h;
        self.viewport.left = self.look_at.x - w / 2.0;
        self.viewport.top = self.look_at.y - h / 2.0;
        self.viewport.right = self.viewport.left + w;
        self.viewport.bottom = self.viewport.top + h;
        self.viewport.scale[0] = cw / w;
        self.viewport.scale[1] = ch / h;
    }

    // ===== MOVEMENT =====

    /// Move the look-at point directly, with no interpolation.
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.look_at = Vec2::new(x, y);
        self.update_viewport();
    }

    /// Set the zoom distance.
    pub fn set_zoom(&mut self, z: f32) {
        self.distance = z;
        self.update_viewport();
    }

    /// Set the field of view in radians.
    pub fn set_fov(&mut self, f: f32) {
        self.field_of_view = f;
        self.update_viewport();
    }

    /// Reset the zoom to its default.
    pub fn reset_zoom(&mut self) {
        self.set_zoom(Self::DEFAULT_DISTANCE);
    }

    /// Reset the field of view to its default.
    pub fn reset_fov(&mut self) {
        self.set_fov(Self::DEFAULT_FOV);
    }

    // ===== FOLLOW =====

    /// Begin smooth tracking of a display-list object.
    ///
    /// Lerp factors of 1 snap instantly; values in (0, 1) apply
    /// exponential smoothing per frame. The key is a weak handle: if
    /// the object is removed, the relation clears itself.
    pub fn start_follow(&mut self, target: RenderableKey, lerp_x: f32, lerp_y: f32) {
        self.following = Some(target);
        self.lerp_x = lerp_x;
        self.lerp_y = lerp_y;
    }

    /// Begin instant-snap tracking of an object.
    pub fn follow(&mut self, target: RenderableKey) {
        self.start_follow(target, 1.0, 1.0);
    }

    /// Stop tracking.
    pub fn stop_follow(&mut self) {
        self.following = None;
    }

    /// World-space rectangle gating follow interpolation: while set,
    /// the look-at only tracks the target when the target intersects
    /// this rectangle.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    /// Advance follow interpolation by one frame.
    fn advance_follow(&mut self, display_list: &DisplayList) {
        let Some(key) = self.following else {
            return;
        };

        let Some(target) = display_list.get(key) else {
            engine_warn!(
                "pond2d::Camera",
                "Follow target no longer exists; stopping follow"
            );
            self.following = None;
            return;
        };

        let within_bounds = match self.bounds {
            None => true,
            Some(bounds) => match target.shape.cull_volume() {
                CullVolume::Rect => rect_intersects_rect(&target.footprint(), &bounds),
                CullVolume::Circular => circle_intersects_rect(target.center(), target.r, &bounds),
                CullVolume::Exempt => false,
            },
        };

        if within_bounds {
            let center = target.center();
            self.look_at.x = lerp(self.look_at.x, center.x, self.lerp_x);
            self.look_at.y = lerp(self.look_at.y, center.y, self.lerp_y);
        }

        self.update_viewport();
    }

    // ===== SMOOTH EFFECTS =====

    /// Step the zoom toward `target` by `step` once per `interval`.
    ///
    /// The direction is chosen once, by comparing the current distance
    /// against the target; if a step overshoots, the effect stops at
    /// the overshot value rather than correcting.
    pub fn set_zoom_smooth(&mut self, interval: Duration, step: f32, target: f32, now: Instant) {
        self.zoom_effect = Some(SmoothEffect::new(interval, step, self.distance, target, now));
    }

    /// Step the field of view toward `target` by `step` once per
    /// `interval`. Same direction semantics as `set_zoom_smooth`.
    pub fn set_fov_smooth(&mut self, interval: Duration, step: f32, target: f32, now: Instant) {
        self.fov_effect = Some(SmoothEffect::new(
            interval,
            step,
            self.field_of_view,
            target,
            now,
        ));
    }

    /// Shake the camera: once per `interval`, perturb the look-at on
    /// one axis by ±`magnitude` (four equally likely outcomes), until
    /// `duration` elapses.
    pub fn shake(&mut self, interval: Duration, duration: Duration, magnitude: f32, now: Instant) {
        self.shake_effect = Some(ShakeEffect::new(interval, duration, magnitude, now));
    }

    /// Cancel all running effect timers.
    pub fn cancel_effects(&mut self) {
        self.zoom_effect = None;
        self.fov_effect = None;
        self.shake_effect = None;
    }

    /// Advance effect timers to `now`, firing any due steps.
    ///
    /// The loop calls this between ticks; tests may drive it with
    /// synthetic timestamps.
    pub fn advance_effects(&mut self, now: Instant) {
        // zoom
        if let Some(mut effect) = self.zoom_effect.take() {
            let fires = effect.ticker.due_fires(now);
            let (applied, finished) = effect.apply(&mut self.distance, fires);
            if applied > 0 {
                self.update_viewport();
            }
            if finished {
                if self.debug {
                    engine_debug!(
                        "pond2d::Camera",
                        "Reached target camera zoom with set_zoom_smooth"
                    );
                }
            } else {
                self.zoom_effect = Some(effect);
            }
        }

        // field of view
        if let Some(mut effect) = self.fov_effect.take() {
            let fires = effect.ticker.due_fires(now);
            let (applied, finished) = effect.apply(&mut self.field_of_view, fires);
            if applied > 0 {
                self.update_viewport();
            }
            if finished {
                if self.debug {
                    engine_debug!(
                        "pond2d::Camera",
                        "Reached target camera FOV with set_fov_smooth"
                    );
                }
            } else {
                self.fov_effect = Some(effect);
            }
        }

        // shake
        if let Some(mut effect) = self.shake_effect.take() {
            let fires = effect.ticker.due_fires(now);
            for _ in 0..fires {
                match random_int(1, 4) {
                    1 => self.look_at.x += effect.magnitude,
                    2 => self.look_at.x -= effect.magnitude,
                    3 => self.look_at.y += effect.magnitude,
                    _ => self.look_at.y -= effect.magnitude,
                }
                self.update_viewport();
            }
            if !effect.expired(now) {
                self.shake_effect = Some(effect);
            }
        }
    }

    // ===== COORDINATE TRANSFORMS =====

    /// Transform a screen-space point (relative to the canvas) into
    /// world coordinates.
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x / self.viewport.scale[0] + self.viewport.left,
            point.y / self.viewport.scale[1] + self.viewport.top,
        )
    }

    /// Transform a world-space point into screen coordinates
    /// (relative to the canvas). Exact inverse of `screen_to_world`
    /// for a stable viewport.
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - self.viewport.left) * self.viewport.scale[0],
            (point.y - self.viewport.top) * self.viewport.scale[1],
        )
    }

    // ===== FRAME BRACKET =====

    /// Begin the camera bracket: saves the surface state, applies the
    /// viewport's scale and translation, then advances follow
    /// interpolation and recomputes the viewport.
    ///
    /// Called by the loop; every `begin` must be paired with `end`.
    /// Prefer `with_frame` for fallible drawing.
    pub fn begin(&mut self, surface: &mut dyn Surface, display_list: &DisplayList) {
        surface.save();
        surface.scale(self.viewport.scale[0], self.viewport.scale[1]);
        surface.translate(-self.viewport.left, -self.viewport.top);

        self.advance_follow(display_list);
    }

    /// End the camera bracket, reverting the surface transform.
    pub fn end(&mut self, surface: &mut dyn Surface) {
        surface.restore();
    }

    /// Run `draw` between `begin` and `end`.
    ///
    /// `end` runs even when `draw` fails, so an error inside the
    /// bracket cannot leave the transform stack unbalanced for the
    /// next camera or frame.
    pub fn with_frame<F>(
        &mut self,
        surface: &mut dyn Surface,
        display_list: &DisplayList,
        draw: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut dyn Surface) -> Result<()>,
    {
        self.begin(surface, display_list);
        let result = draw(surface);
        self.end(surface);
        result
    }

    // ===== CULLING =====

    /// Explicit-list culling: keep exactly the currently-visible
    /// objects present in `keep`, and un-keep the rest.
    ///
    /// Kept objects get `culled = true` (or `visible = true` when
    /// `preserve_visibility` is off) and optionally physics enabled;
    /// the rest get the opposite. Map objects are never toggled.
    /// Finishes with an immediate pipeline refresh, bypassing the
    /// pool throttle.
    pub fn cull(
        &self,
        display_list: &mut DisplayList,
        pipeline: &mut RenderPipeline,
        keep: &[RenderableKey],
        options: CullingOptions,
    ) {
        let kept: FxHashSet<RenderableKey> = keep.iter().copied().collect();
        let visible = display_list.visibility_filter(true);

        Self::apply_cull(display_list, &visible, &kept, options);
        pipeline.pool_now(display_list);
    }

    /// Automatic frustum culling: keep the objects whose bounding
    /// volume intersects the current viewport rectangle.
    ///
    /// Rect-volume shapes use rect-vs-rect, circle-volume shapes use
    /// circle-vs-rect; exempt shapes are never kept. Toggling and the
    /// pipeline refresh behave exactly like `cull`.
    pub fn auto_cull(
        &self,
        display_list: &mut DisplayList,
        pipeline: &mut RenderPipeline,
        options: CullingOptions,
    ) {
        let view_rect = self.viewport.world_rect();

        let mut kept = FxHashSet::default();
        for (key, object) in display_list.iter() {
            let inside = match object.shape.cull_volume() {
                CullVolume::Rect => rect_intersects_rect(&object.footprint(), &view_rect),
                CullVolume::Circular => circle_intersects_rect(object.center(), object.r, &view_rect),
                CullVolume::Exempt => false,
            };
            if inside {
                kept.insert(key);
            }
        }

        let all: Vec<RenderableKey> = display_list.keys().collect();
        Self::apply_cull(display_list, &all, &kept, options);
        pipeline.pool_now(display_list);
    }

    /// Toggle flags on `keys` according to membership in `kept`.
    fn apply_cull(
        display_list: &mut DisplayList,
        keys: &[RenderableKey],
        kept: &FxHashSet<RenderableKey>,
        options: CullingOptions,
    ) {
        for &key in keys {
            let Some(object) = display_list.get_mut(key) else {
                continue;
            };

            // maps are never toggled by culling passes
            if object.shape == Shape::Map {
                continue;
            }

            let is_kept = kept.contains(&key);

            if options.preserve_visibility {
                object.set_culled(is_kept);
            } else {
                object.set_visible(is_kept);
            }

            if options.modify_physics_enable {
                object.set_physics_enabled(is_kept);
            }
        }
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
