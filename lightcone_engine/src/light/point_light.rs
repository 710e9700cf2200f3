/// PointLight: omnidirectional light bounded by its range.

use glam::Vec3;
use crate::geometry::AABB;
use super::config::{PointLightConfig, MIN_RANGE};
use super::dirty::LightDirty;

#[derive(Debug, Clone)]
pub struct PointLight {
    range: f32,
    color: Vec3,
    dirty: LightDirty,
    bounding_box: AABB,
}

impl Default for PointLight {
    fn default() -> Self {
        Self::new(&PointLightConfig::default())
    }
}

impl PointLight {
    pub fn new(config: &PointLightConfig) -> Self {
        let mut light = Self {
            range: MIN_RANGE,
            color: config.color,
            dirty: LightDirty::BOUNDING_BOX,
            bounding_box: AABB::from_half_extent(0.0),
        };
        light.set_range(config.range);
        light
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    /// Set the range, clamped up to `MIN_RANGE`. Returns the stored value.
    pub fn set_range(&mut self, distance: f32) -> f32 {
        let range = if distance < MIN_RANGE { MIN_RANGE } else { distance };
        if self.range != range {
            self.range = range;
            self.dirty |= LightDirty::BOUNDING_BOX;
        }
        self.range
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Light-local bounding box: a cube of half extent `range`.
    pub fn bounding_box(&mut self) -> AABB {
        if self.dirty.take(LightDirty::BOUNDING_BOX) {
            self.bounding_box = AABB::from_half_extent(self.range);
        }
        self.bounding_box
    }
}

#[cfg(test)]
#[path = "point_light_tests.rs"]
mod tests;
