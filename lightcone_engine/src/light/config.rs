/// Construction parameters for each light kind.
///
/// Configs are plain data. Building a light from a config runs every value
/// through the light's own setters, so the usual clamps apply.

use glam::Vec3;

/// Smallest range a light may have. Smaller values are clamped up to it.
pub const MIN_RANGE: f32 = 0.0001;

/// Range given to lights that do not specify one.
pub const DEFAULT_RANGE: f32 = 1.0;

/// Default full cone angle of a spot light, in degrees.
pub const DEFAULT_OUTER_ANGLE: f32 = 45.0;

/// Default inner cone angle of a spot light, in degrees.
pub const DEFAULT_INNER_ANGLE: f32 = 35.0;

/// Default near clip distance of a spot light.
pub const DEFAULT_Z_NEAR: f32 = 0.1;

/// Default aspect ratio (only used in no-cone mode).
pub const DEFAULT_ASPECT: f32 = 1.0;

/// Spot light parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLightConfig {
    /// Full cone angle in degrees
    pub outer_angle: f32,
    /// Inner cone angle in degrees (clamped to `outer_angle`)
    pub inner_angle: f32,
    /// Near clip distance
    pub z_near: f32,
    /// Aspect ratio, only used when `no_cone` is set
    pub aspect: f32,
    /// Far clip distance / light radius
    pub range: f32,
    /// Project a rectangle with `aspect` instead of a 1:1 cone
    pub no_cone: bool,
    /// Linear RGB color
    pub color: Vec3,
}

impl Default for SpotLightConfig {
    fn default() -> Self {
        Self {
            outer_angle: DEFAULT_OUTER_ANGLE,
            inner_angle: DEFAULT_INNER_ANGLE,
            z_near: DEFAULT_Z_NEAR,
            aspect: DEFAULT_ASPECT,
            range: DEFAULT_RANGE,
            no_cone: false,
            color: Vec3::ONE,
        }
    }
}

/// Point light parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLightConfig {
    pub range: f32,
    pub color: Vec3,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self { range: DEFAULT_RANGE, color: Vec3::ONE }
    }
}

/// Projective point light parameters (point light projecting a cube map).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectivePointLightConfig {
    pub range: f32,
    pub color: Vec3,
}

impl Default for ProjectivePointLightConfig {
    fn default() -> Self {
        Self { range: DEFAULT_RANGE, color: Vec3::ONE }
    }
}
