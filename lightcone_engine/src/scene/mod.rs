//! Scene module
//!
//! Places lights under parent containers and answers the per-frame
//! questions a renderer asks: world bounds, culling, GPU records, debug lines.

mod light_scene;

pub use light_scene::{LightScene, LightKey, LightNode};
