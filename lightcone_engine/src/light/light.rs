/// Light: closed set of light kinds, dispatched by `match`.

use glam::{Quat, Vec3};
use crate::geometry::AABB;
use super::point_light::PointLight;
use super::projective_point_light::ProjectivePointLight;
use super::spot_light::SpotLight;

/// Discriminant of a `Light`, for logging and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightKind {
    Point,
    Spot,
    ProjectivePoint,
}

#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
    Spot(SpotLight),
    ProjectivePoint(ProjectivePointLight),
}

impl Light {
    pub fn kind(&self) -> LightKind {
        match self {
            Light::Point(_) => LightKind::Point,
            Light::Spot(_) => LightKind::Spot,
            Light::ProjectivePoint(_) => LightKind::ProjectivePoint,
        }
    }

    pub fn range(&self) -> f32 {
        match self {
            Light::Point(light) => light.range(),
            Light::Spot(light) => light.frustum_cache().range(),
            Light::ProjectivePoint(light) => light.range(),
        }
    }

    /// Set the range, clamped up to `MIN_RANGE`. Returns the stored value.
    pub fn set_range(&mut self, distance: f32) -> f32 {
        match self {
            Light::Point(light) => light.set_range(distance),
            Light::Spot(light) => light.frustum_cache_mut().set_range(distance),
            Light::ProjectivePoint(light) => light.set_range(distance),
        }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            Light::Point(light) => light.color(),
            Light::Spot(light) => light.color(),
            Light::ProjectivePoint(light) => light.color(),
        }
    }

    pub fn set_color(&mut self, color: Vec3) {
        match self {
            Light::Point(light) => light.set_color(color),
            Light::Spot(light) => light.set_color(color),
            Light::ProjectivePoint(light) => light.set_color(color),
        }
    }

    /// Hand the owner's new parent-space pose to the light.
    ///
    /// Point lights are orientation-free and keep no pose snapshot.
    pub(crate) fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        match self {
            Light::Point(_) => {}
            Light::Spot(light) => light.frustum_cache_mut().set_pose(position, rotation),
            Light::ProjectivePoint(light) => light.set_pose(position, rotation),
        }
    }

    /// Mark pose-dependent caches dirty without handing over a new pose.
    pub fn on_position_or_rotation_changed(&mut self) {
        match self {
            Light::Point(_) => {}
            Light::Spot(light) => light.frustum_cache_mut().on_position_or_rotation_changed(),
            Light::ProjectivePoint(light) => light.on_position_or_rotation_changed(),
        }
    }

    /// Light-local bounding box.
    pub fn bounding_box(&mut self) -> AABB {
        match self {
            Light::Point(light) => light.bounding_box(),
            Light::Spot(light) => light.bounding_box(),
            Light::ProjectivePoint(light) => light.bounding_box(),
        }
    }

    pub fn as_spot(&self) -> Option<&SpotLight> {
        match self {
            Light::Spot(light) => Some(light),
            _ => None,
        }
    }

    pub fn as_spot_mut(&mut self) -> Option<&mut SpotLight> {
        match self {
            Light::Spot(light) => Some(light),
            _ => None,
        }
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

impl From<SpotLight> for Light {
    fn from(light: SpotLight) -> Self {
        Light::Spot(light)
    }
}

impl From<ProjectivePointLight> for Light {
    fn from(light: ProjectivePointLight) -> Self {
        Light::ProjectivePoint(light)
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
