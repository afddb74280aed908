//! Game object module — renderable objects and their shape taxonomy.
//!
//! A [`Renderable`] is any display object the loop can draw and the
//! camera can cull: shapes, sprites, UI footprints, lights, particles,
//! maps. Ownership lives in a scene's display list; cameras reference
//! objects only through stable keys.

mod shape;
mod renderable;

pub use shape::{Shape, CullVolume};
pub use renderable::{Renderable, RenderableKey, ObjectFlags};
