//! Geometry module — world-space rectangles and intersection predicates.
//!
//! Pure data and pure functions. The camera uses these predicates for
//! frustum culling and follow-bounds gating; object physics uses the
//! rectangle type for positional clamping.

mod rect;
mod intersect;

pub use rect::Rect;
pub use intersect::{rect_intersects_rect, circle_intersects_rect};
