//! Scene module — display list, render pipeline, and scenes.
//!
//! A scene owns the ordered registry of renderables (the display
//! list), its cameras, and a render pipeline caching the depth-sorted
//! draw snapshot. User behavior hooks attach through [`SceneScript`].

mod display_list;
mod pipeline;
mod scene;

pub use display_list::DisplayList;
pub use pipeline::RenderPipeline;
pub use scene::{Scene, SceneScript};
