//! Light module: cone, point and projective point lights.
//!
//! Every light keeps its derived geometry (matrices, frustum, bounds) behind
//! private dirty bits: setters mark, getters recompute on demand.

mod config;
mod debug_geometry;
mod dirty;
mod frustum_cache;
mod gpu_data;
mod light;
mod point_light;
mod projective_point_light;
mod spot_light;

pub use config::{
    SpotLightConfig, PointLightConfig, ProjectivePointLightConfig,
    MIN_RANGE, DEFAULT_RANGE, DEFAULT_OUTER_ANGLE, DEFAULT_INNER_ANGLE,
    DEFAULT_Z_NEAR, DEFAULT_ASPECT,
};
pub use debug_geometry::{DebugGeometry, SpotLightDebugOptions, FRUSTUM_BOX_EDGES};
pub use frustum_cache::{
    LightFrustumCache, RecomputeStats, VIEW_ROTATION_OFFSET, CLIP_CUBE_CORNERS,
};
pub use gpu_data::SpotLightGpuData;
pub use light::{Light, LightKind};
pub use point_light::PointLight;
pub use projective_point_light::ProjectivePointLight;
pub use spot_light::SpotLight;
