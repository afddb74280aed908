//! Render surface module — the render target contract.
//!
//! The engine does not draw pixels itself. It addresses any 2D surface
//! implementing the [`Surface`] trait: save/restore, scale, translate,
//! and primitive fills in a single shared coordinate space. Backend
//! implementations live in separate crates (see
//! `pond_2d_engine_renderer_canvas` for the software raster backend).

mod color;
mod surface;
pub mod mock_surface;

pub use color::Color;
pub use surface::{Surface, Blend};
