/*!
# Pond 2D Engine

Core types for the Pond 2D canvas game engine.

This crate provides the platform-agnostic engine core: the game loop
and frame timing, scenes with ordered display lists, cameras with
viewport-derived coordinate transforms and culling, and the geometry
predicates behind both. Drawing goes through the [`surface::Surface`]
trait; backend implementations live in separate crates (see
`pond_2d_engine_renderer_canvas` for the software raster backend).

## Architecture

- **Game**: loop state machine, scene stack, frame timing
- **Scene**: display list + cameras + render pipeline + user hooks
- **Camera**: viewport model, follow, smooth effects, culling
- **DisplayList**: ordered registry of renderables with stable keys
- **Surface**: render target contract implemented by backends
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod utils;
pub mod geometry;
pub mod surface;
pub mod gameobject;
pub mod scene;
pub mod camera;
pub mod game;

// Main pond2d namespace module
pub mod pond2d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Geometry sub-module
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Surface sub-module
    pub mod surface {
        pub use crate::surface::{Surface, Blend, Color};
    }

    // Game object sub-module
    pub mod gameobject {
        pub use crate::gameobject::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Game sub-module
    pub mod game {
        pub use crate::game::*;
    }
}

// Re-export math library at crate root
pub use glam;
