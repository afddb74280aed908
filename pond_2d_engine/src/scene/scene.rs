/// Scene — a keyed stage with its own display list and cameras.
///
/// The Game's loop advances every scene each tick: camera effects
/// fire, the current camera brackets the frame, and — when the scene
/// is visible — the user script's update hook runs, followed by the
/// internal object tick and the depth-sorted draw.
///
/// User behavior attaches through `SceneScript`; the engine calls
/// `preload` and `create` once before the first frame, `update` every
/// tick, and `on_change` when the scene is switched to.

use std::time::Instant;
use glam::Vec2;
use crate::camera::Camera;
use crate::gameobject::RenderableKey;
use crate::engine_error;
use crate::surface::Surface;
use super::display_list::DisplayList;
use super::pipeline::RenderPipeline;

/// User hooks for a scene. All hooks have empty default bodies.
pub trait SceneScript {
    /// Called once, before the first frame, ahead of `create`.
    /// Asset-producing collaborators load here.
    fn preload(&mut self, _scene: &mut Scene) {}

    /// Called once, before the first frame, after `preload`.
    fn create(&mut self, _scene: &mut Scene) {}

    /// Called every tick while the scene is visible.
    fn update(&mut self, _scene: &mut Scene, _delta: f32) {}

    /// Called when the scene becomes the target of a switch.
    fn on_change(&mut self, _scene: &mut Scene) {}
}

/// A stage of the game: display list, cameras, pipeline, and hooks.
pub struct Scene {
    key: String,
    /// Read by the loop every tick; switched scenes toggle this.
    pub visible: bool,
    pub display_list: DisplayList,
    pub pipeline: RenderPipeline,
    cameras: Vec<Camera>,
    current_camera: Option<usize>,
    script: Option<Box<dyn SceneScript>>,
    loaded: bool,
}

impl Scene {
    /// Create a scene with no behavior hooks.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            visible: false,
            display_list: DisplayList::new(),
            pipeline: RenderPipeline::default(),
            cameras: Vec::new(),
            current_camera: None,
            script: None,
            loaded: false,
        }
    }

    /// Create a scene with behavior hooks.
    pub fn with_script(key: impl Into<String>, script: Box<dyn SceneScript>) -> Self {
        let mut scene = Self::new(key);
        scene.script = Some(script);
        scene
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the behavior hooks.
    pub fn set_script(&mut self, script: Box<dyn SceneScript>) {
        self.script = Some(script);
    }

    // ===== CAMERAS =====

    /// Add a camera; returns its index. The first camera added becomes
    /// the current camera.
    pub fn add_camera(&mut self, camera: Camera) -> usize {
        self.cameras.push(camera);
        let index = self.cameras.len() - 1;
        if self.current_camera.is_none() {
            self.current_camera = Some(index);
        }
        index
    }

    /// Select the camera bracketing this scene's frames.
    pub fn set_current_camera(&mut self, index: usize) {
        if index < self.cameras.len() {
            self.current_camera = Some(index);
        } else {
            engine_error!(
                "pond2d::Scene",
                "Cannot set current camera: index {} out of range ({} cameras)",
                index,
                self.cameras.len()
            );
        }
    }

    pub fn current_camera(&self) -> Option<&Camera> {
        self.current_camera.and_then(|i| self.cameras.get(i))
    }

    pub fn current_camera_mut(&mut self) -> Option<&mut Camera> {
        match self.current_camera {
            Some(i) => self.cameras.get_mut(i),
            None => None,
        }
    }

    pub fn camera_mut(&mut self, index: usize) -> Option<&mut Camera> {
        self.cameras.get_mut(index)
    }

    /// Run explicit-list culling with the current camera.
    ///
    /// Convenience splitting the borrows between the camera and the
    /// display list + pipeline it partitions.
    pub fn cull(&mut self, keep: &[RenderableKey], options: crate::camera::CullingOptions) {
        let Self {
            cameras,
            current_camera,
            display_list,
            pipeline,
            ..
        } = self;
        if let Some(camera) = current_camera.and_then(|i| cameras.get(i)) {
            camera.cull(display_list, pipeline, keep, options);
        }
    }

    /// Run automatic frustum culling with the current camera.
    pub fn auto_cull(&mut self, options: crate::camera::CullingOptions) {
        let Self {
            cameras,
            current_camera,
            display_list,
            pipeline,
            ..
        } = self;
        if let Some(camera) = current_camera.and_then(|i| cameras.get(i)) {
            camera.auto_cull(display_list, pipeline, options);
        }
    }

    // ===== LOOP HOOKS (called by Game) =====

    /// Run `preload` + `create` once.
    pub(crate) fn ensure_loaded(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        if let Some(mut script) = self.script.take() {
            script.preload(self);
            script.create(self);
            self.script = Some(script);
        }
    }

    /// Fire the `on_change` hook.
    pub(crate) fn run_on_change(&mut self) {
        if let Some(mut script) = self.script.take() {
            script.on_change(self);
            self.script = Some(script);
        }
    }

    fn run_update(&mut self, delta: f32) {
        if let Some(mut script) = self.script.take() {
            script.update(self, delta);
            self.script = Some(script);
        }
    }

    /// Internal per-tick object pass: apply velocity impulses, clamp
    /// into bounds, zero velocities.
    fn tick_objects(&mut self, delta: f32, round_pixels: bool) {
        for object in self.display_list.values_mut() {
            object.integrate(delta, round_pixels);
        }
    }

    /// Propagate canvas size and configuration to every camera.
    pub(crate) fn sync_cameras(
        &mut self,
        width: f32,
        height: f32,
        dpr: f32,
        dpr_scale: bool,
        debug: bool,
    ) {
        for camera in &mut self.cameras {
            camera.apply_config(dpr_scale, debug);
            camera.on_canvas_resize(width, height, dpr);
        }
    }

    /// Advance all camera effect timers. Effects interleave between
    /// ticks, never within one.
    pub(crate) fn advance_effects(&mut self, now: Instant) {
        for camera in &mut self.cameras {
            camera.advance_effects(now);
        }
    }

    /// Run one frame of this scene: camera bracket around update,
    /// internal tick, and the depth-sorted draw.
    ///
    /// The bracket runs whenever a current camera exists, visible or
    /// not; update/tick/draw run only for visible scenes. The end of
    /// the bracket always runs, keeping save/restore balanced.
    pub(crate) fn frame(
        &mut self,
        surface: &mut dyn Surface,
        delta: f32,
        round_pixels: bool,
        now: Instant,
    ) {
        self.advance_effects(now);

        {
            let Self {
                cameras,
                current_camera,
                display_list,
                ..
            } = self;
            if let Some(camera) = current_camera.and_then(|i| cameras.get_mut(i)) {
                camera.begin(surface, display_list);
            }
        }

        if self.visible {
            self.run_update(delta);
            self.tick_objects(delta, round_pixels);

            // snapshot at sort time: objects added or removed past
            // this point show up next tick
            let order: Vec<RenderableKey> =
                self.pipeline.pool(&self.display_list, now).to_vec();
            for key in order {
                if let Some(object) = self.display_list.get(key) {
                    if object.visible() {
                        object.draw(surface);
                    }
                }
            }
        }

        if let Some(camera) = self.current_camera.and_then(|i| self.cameras.get_mut(i)) {
            camera.end(surface);
        }
    }

    /// Screen-to-world transform through the current camera, for
    /// pointer event translation. Identity when no camera is set.
    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        match self.current_camera() {
            Some(camera) => camera.screen_to_world(point),
            None => point,
        }
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
