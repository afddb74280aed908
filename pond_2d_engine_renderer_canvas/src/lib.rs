/*!
# Pond 2D Engine - Canvas Renderer Backend

Software raster implementation of the Pond 2D engine's render surface.

This crate provides an offscreen canvas that implements the
`pond_2d_engine` Surface trait on an in-memory RGBA pixel buffer:
alpha compositing, additive blending for lights, and a save/restore
transform stack matching the camera's scale/translate bracket. The
buffer can be read back directly (tests, screenshots) or uploaded to
any presentation layer.
*/

mod canvas_surface;

pub use canvas_surface::CanvasSurface;
