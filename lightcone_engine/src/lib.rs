/*!
# Lightcone Engine

Light geometry caches for a scene-graph renderer.

A spot light shines a cone (or, in "no cone" mode, a rectangular pyramid)
from its position. Renderers repeatedly ask it for a projection matrix, a
view matrix, six frustum planes and eight frustum corners. This crate keeps
those values cached behind dirty bits so they are rebuilt only after a
setter or a pose change actually invalidated them.

## Architecture

- **LightFrustumCache**: Spot light shape, pose and lazily derived matrices
- **SpotLight / PointLight / ProjectivePointLight**: Light variants with cached bounds
- **LightScene**: Stable-keyed light storage with parent transforms, culling and GPU records
- **Frustum / AABB**: Plane set and bounding box value types
- **Engine**: Process-wide logger facade used by every module

Frustum vertices and frustum planes are expressed in the light's parent
space; applying the parent's world matrix is left to the caller (or to
`LightScene`).
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod geometry;
pub mod light;
pub mod scene;

// Main lightcone namespace module
pub mod lightcone {
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

    // Light sub-module
    pub mod light {
        pub use crate::light::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
