//! Camera module — viewport, coordinate transforms, follow, effects,
//! and culling.
//!
//! A camera owns a viewport derived from its look-at point, field of
//! view, and distance (zoom). The engine does not store cameras
//! globally; scenes own them and the loop drives the active one's
//! begin/end bracket around drawing.

mod viewport;
mod effects;
mod camera;

pub use viewport::Viewport;
pub use camera::{Camera, CullingOptions};
