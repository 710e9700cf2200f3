/// ProjectivePointLight: point light projecting a cube map.
///
/// Bounds and range behave like a `PointLight`; the rotation orients the
/// projected cube map, so the light also caches a view matrix built with the
/// same 180° yaw convention as spot lights.

use glam::{Mat4, Quat, Vec3};
use crate::geometry::AABB;
use super::config::{ProjectivePointLightConfig, PointLightConfig};
use super::dirty::LightDirty;
use super::frustum_cache::VIEW_ROTATION_OFFSET;
use super::point_light::PointLight;

#[derive(Debug, Clone)]
pub struct ProjectivePointLight {
    point: PointLight,
    position: Vec3,
    rotation: Quat,
    dirty: LightDirty,
    view_matrix: Mat4,
}

impl Default for ProjectivePointLight {
    fn default() -> Self {
        Self::new(&ProjectivePointLightConfig::default())
    }
}

impl ProjectivePointLight {
    pub fn new(config: &ProjectivePointLightConfig) -> Self {
        Self {
            point: PointLight::new(&PointLightConfig { range: config.range, color: config.color }),
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            dirty: LightDirty::VIEW_MATRIX,
            view_matrix: Mat4::IDENTITY,
        }
    }

    pub fn range(&self) -> f32 {
        self.point.range()
    }

    pub fn set_range(&mut self, distance: f32) -> f32 {
        self.point.set_range(distance)
    }

    pub fn color(&self) -> Vec3 {
        self.point.color()
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.point.set_color(color);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Store a new parent-space pose. Written by the owning scene node only.
    pub(crate) fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        if self.position != position || self.rotation != rotation {
            self.position = position;
            self.rotation = rotation;
            self.on_position_or_rotation_changed();
        }
    }

    pub fn on_position_or_rotation_changed(&mut self) {
        self.dirty |= LightDirty::VIEW_MATRIX;
    }

    /// Parent space to cube-map space.
    pub fn view_matrix(&mut self) -> Mat4 {
        if self.dirty.take(LightDirty::VIEW_MATRIX) {
            self.view_matrix = Mat4::from_rotation_translation(
                self.rotation * VIEW_ROTATION_OFFSET,
                self.position,
            ).inverse();
        }
        self.view_matrix
    }

    pub fn bounding_box(&mut self) -> AABB {
        self.point.bounding_box()
    }
}

#[cfg(test)]
#[path = "projective_point_light_tests.rs"]
mod tests;
