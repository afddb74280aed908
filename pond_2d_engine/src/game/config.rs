/// GameConfig — options owned by the Game, consumed by cameras and
/// the loop.

use crate::surface::Color;

/// Game configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Canvas width override applied to the surface at creation
    pub width: Option<u32>,
    /// Canvas height override applied to the surface at creation
    pub height: Option<u32>,
    /// Frame clear color; transparent when unset
    pub background: Option<Color>,
    /// Device-pixel-ratio compensation: cameras work in logical pixels
    /// and pin the zoom to 1000 / dpr
    pub dpr_scale: bool,
    /// Diagnostic logging of smoothing/convergence events
    pub debug: bool,
    /// Snap object positions to integers after each internal tick
    pub round_pixels: bool,
    /// Key of the scene shown at startup
    pub default_scene: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            background: None,
            dpr_scale: false,
            debug: false,
            round_pixels: false,
            default_scene: "main".to_string(),
        }
    }
}
