/// Game — the loop state machine and scene stack.
///
/// The Game owns the render surface, the scene stack, and the frame
/// timing. The host owns the frame-pacing primitive: it calls
/// `tick(now)` once per frame and keeps scheduling ticks while the
/// returned control says `Continue`. `stop()` flips the state so the
/// current or next report reads `Stopped`, cancelling further
/// scheduling; independently-running camera effects are separate
/// handles and are not retroactively cancelled.

use std::time::Instant;
use crate::engine_error;
use crate::engine_info;
use crate::engine_warn;
use crate::error::{Error, Result};
use crate::scene::Scene;
use crate::surface::{Surface, Color};
use super::config::GameConfig;
use super::timing::FrameTiming;

/// Loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// What the host should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    /// Schedule the next tick
    Continue,
    /// Do not schedule further ticks
    Stopped,
}

/// The game: surface, scene stack, loop state, and timing.
pub struct Game {
    config: GameConfig,
    surface: Box<dyn Surface>,
    scenes: Vec<Scene>,
    state: LoopState,
    timing: FrameTiming,
}

impl Game {
    /// Create a game over a render surface.
    ///
    /// Applies the configured canvas size override to the surface.
    pub fn new(config: GameConfig, mut surface: Box<dyn Surface>) -> Self {
        if let (Some(w), Some(h)) = (config.width, config.height) {
            surface.set_size(w, h);
        } else if let Some(w) = config.width {
            surface.set_size(w, surface.height());
        } else if let Some(h) = config.height {
            surface.set_size(surface.width(), h);
        }

        engine_info!(
            "pond2d::Game",
            "Game created ({}x{})",
            surface.width(),
            surface.height()
        );

        Self {
            config,
            surface,
            scenes: Vec::new(),
            state: LoopState::Stopped,
            timing: FrameTiming::new(),
        }
    }

    // ===== ACCESSORS =====

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    pub fn surface(&self) -> &dyn Surface {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> &mut dyn Surface {
        self.surface.as_mut()
    }

    // ===== SCENE STACK =====

    /// Add a scene. The scene starts visible only when its key matches
    /// the configured default scene. Cameras adopt the current canvas
    /// size and configuration.
    pub fn add_scene(&mut self, mut scene: Scene) {
        scene.visible = scene.key() == self.config.default_scene;
        self.sync_scene_cameras(&mut scene);
        self.scenes.push(scene);
    }

    /// Add several scenes at once.
    pub fn add_scenes(&mut self, scenes: Vec<Scene>) {
        for scene in scenes {
            self.add_scene(scene);
        }
    }

    /// Remove a scene by key. Returns it, or None if the key is
    /// unknown (logged).
    pub fn remove_scene(&mut self, key: &str) -> Option<Scene> {
        match self.scenes.iter().position(|s| s.key() == key) {
            Some(index) => Some(self.scenes.remove(index)),
            None => {
                engine_error!(
                    "pond2d::Game",
                    "Cannot remove scene with key \"{}\": scene not found",
                    key
                );
                None
            }
        }
    }

    pub fn scene(&self, key: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.key() == key)
    }

    pub fn scene_mut(&mut self, key: &str) -> Option<&mut Scene> {
        self.scenes.iter_mut().find(|s| s.key() == key)
    }

    /// Hide the scene at `from`, show the one at `to`, and fire its
    /// `on_change` hook.
    ///
    /// Unknown keys are logged logical errors; no visibility changes.
    pub fn switch_scene(&mut self, from: &str, to: &str) -> Result<()> {
        let from_index = self.scenes.iter().position(|s| s.key() == from);
        let Some(from_index) = from_index else {
            engine_error!(
                "pond2d::Game",
                "Cannot switch from scene with key \"{}\": scene not found",
                from
            );
            return Err(Error::SceneNotFound(from.to_string()));
        };

        let to_index = self.scenes.iter().position(|s| s.key() == to);
        let Some(to_index) = to_index else {
            engine_error!(
                "pond2d::Game",
                "Cannot switch to scene with key \"{}\": scene not found",
                to
            );
            return Err(Error::SceneNotFound(to.to_string()));
        };

        self.scenes[from_index].visible = false;
        self.scenes[to_index].visible = true;
        self.scenes[to_index].ensure_loaded();
        self.scenes[to_index].run_on_change();
        Ok(())
    }

    /// Make the scene at `key` visible. Unknown keys are logged and
    /// leave state untouched.
    pub fn show_scene(&mut self, key: &str) -> Result<()> {
        match self.scenes.iter_mut().find(|s| s.key() == key) {
            Some(scene) => {
                scene.visible = true;
                scene.ensure_loaded();
                Ok(())
            }
            None => {
                engine_error!(
                    "pond2d::Game",
                    "Cannot show scene with key \"{}\": scene not found",
                    key
                );
                Err(Error::SceneNotFound(key.to_string()))
            }
        }
    }

    // ===== LOOP =====

    /// Move Stopped → Running and run every scene's `preload` +
    /// `create` hooks. A second `start` while running is a logged
    /// no-op.
    pub fn start(&mut self) {
        if self.state == LoopState::Running {
            engine_warn!("pond2d::Game", "start() called but the loop is already running");
            return;
        }

        for scene in &mut self.scenes {
            scene.ensure_loaded();
        }

        self.state = LoopState::Running;
        engine_info!("pond2d::Game", "Started frame loop");
    }

    /// Move Running → Stopped. Stopping an already-stopped loop is a
    /// logged no-op.
    ///
    /// This cancels the scheduled next tick (the host sees `Stopped`)
    /// but not independently-running camera effect timers.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            engine_warn!("pond2d::Game", "stop() called but the loop is not running");
            return;
        }

        self.state = LoopState::Stopped;
        engine_info!("pond2d::Game", "Stopped frame loop");
    }

    /// Run one tick at `now`.
    ///
    /// Clears the surface, updates frame timing, then advances and
    /// draws every scene (update-then-draw, camera brackets around
    /// each scene's draws). Ticking a stopped loop is a no-op: the
    /// delta history does not grow.
    pub fn tick(&mut self, now: Instant) -> LoopControl {
        if self.state == LoopState::Stopped {
            return LoopControl::Stopped;
        }

        self.clear_frame();
        self.timing.update(now);

        let delta = self.timing.delta();
        let round_pixels = self.config.round_pixels;

        for scene in &mut self.scenes {
            scene.frame(self.surface.as_mut(), delta, round_pixels, now);
        }

        match self.state {
            LoopState::Running => LoopControl::Continue,
            LoopState::Stopped => LoopControl::Stopped,
        }
    }

    /// Fill the whole surface with the configured background color.
    pub fn clear_frame(&mut self) {
        if self.surface.width() == 0 || self.surface.height() == 0 {
            engine_error!(
                "pond2d::Game",
                "Cannot clear frame: render context unavailable"
            );
            return;
        }
        let background = self.config.background.unwrap_or(Color::TRANSPARENT);
        self.surface.clear(background);
    }

    // ===== RESIZE =====

    /// Resize the surface and propagate the new size to every
    /// camera.
    ///
    /// This is the engine's resize subscription: the host forwards its
    /// window/canvas resize events here, and teardown of the Game
    /// tears the subscription down with it.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        self.surface.set_size(width, height);

        let w = width as f32;
        let h = height as f32;
        let dpr = self.surface.device_pixel_ratio();
        let dpr_scale = self.config.dpr_scale;
        let debug = self.config.debug;
        for scene in &mut self.scenes {
            scene.sync_cameras(w, h, dpr, dpr_scale, debug);
        }
    }

    fn sync_scene_cameras(&self, scene: &mut Scene) {
        scene.sync_cameras(
            self.surface.width() as f32,
            self.surface.height() as f32,
            self.surface.device_pixel_ratio(),
            self.config.dpr_scale,
            self.config.debug,
        );
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod tests;
