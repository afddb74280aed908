/// Shape — closed set of renderable kinds.
///
/// Culling and drawing dispatch on this tag instead of downcasting.
/// Every shape maps to exactly one bounding volume through
/// `cull_volume()`, so intersection logic lives in one place.

/// Kind of a renderable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Filled rectangle
    Rect,
    /// Rectangle with rounded corners
    RoundRect,
    /// Textured rectangle (drawn as its footprint here)
    Sprite,
    /// UI button footprint
    Button,
    /// UI text footprint
    Text,
    /// Filled circle
    Circle,
    /// Additive-blended light disc
    Light,
    /// Particle disc
    Particle,
    /// Tile map; exempt from culling decisions
    Map,
}

/// Bounding volume a shape presents to the culling predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CullVolume {
    /// Test with rect-vs-rect intersection
    Rect,
    /// Test with circle-vs-rect intersection
    Circular,
    /// Never tested; culling passes skip the object entirely
    Exempt,
}

impl Shape {
    /// Bounding volume used by frustum culling and follow-bounds
    /// gating.
    pub fn cull_volume(&self) -> CullVolume {
        match self {
            Shape::Rect | Shape::RoundRect | Shape::Sprite | Shape::Button | Shape::Text => {
                CullVolume::Rect
            }
            Shape::Circle | Shape::Light | Shape::Particle => CullVolume::Circular,
            Shape::Map => CullVolume::Exempt,
        }
    }
}
