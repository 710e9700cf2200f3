/// SpotLight: cone light built around a `LightFrustumCache`.
///
/// The cache answers every projection question; the spot light adds color
/// and a light-local bounding box that is rebuilt whenever the cache reports
/// the cone shape changed.

use glam::Vec3;
use crate::geometry::AABB;
use super::config::SpotLightConfig;
use super::frustum_cache::LightFrustumCache;

#[derive(Debug, Clone)]
pub struct SpotLight {
    frustum_cache: LightFrustumCache,
    color: Vec3,
    bounding_box: AABB,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self::new(&SpotLightConfig::default())
    }
}

impl SpotLight {
    pub fn new(config: &SpotLightConfig) -> Self {
        Self {
            frustum_cache: LightFrustumCache::from_config(config),
            color: config.color,
            bounding_box: AABB::from_half_extent(0.0),
        }
    }

    pub fn frustum_cache(&self) -> &LightFrustumCache {
        &self.frustum_cache
    }

    pub fn frustum_cache_mut(&mut self) -> &mut LightFrustumCache {
        &mut self.frustum_cache
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Light-local bounding box: the apex plus the 8 cone-frustum corners.
    pub fn bounding_box(&mut self) -> AABB {
        if self.frustum_cache.take_bounding_box_dirty() {
            let corners = self.frustum_cache.local_frustum_vertices();
            let mut points = [Vec3::ZERO; 9];
            points[1..].copy_from_slice(&corners);
            self.bounding_box = AABB::from_points(&points);
        }
        self.bounding_box
    }
}

#[cfg(test)]
#[path = "spot_light_tests.rs"]
mod tests;
