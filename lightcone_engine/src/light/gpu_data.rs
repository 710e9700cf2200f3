/// GPU-ready spot light record.
///
/// Laid out for a std140/std430 uniform or storage buffer: one 4x4 matrix
/// followed by three vec4s, 112 bytes total.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use super::spot_light::SpotLight;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpotLightGpuData {
    /// World space to light clip space
    pub view_projection: [[f32; 4]; 4],
    /// xyz: world position, w: range
    pub position_range: [f32; 4],
    /// xyz: world direction (normalized), w: cos(outer angle / 2)
    pub direction_cos_outer: [f32; 4],
    /// xyz: linear RGB color, w: cos(inner angle / 2)
    pub color_cos_inner: [f32; 4],
}

impl SpotLightGpuData {
    /// Build the record for a spot light whose parent has world matrix `parent_world`.
    ///
    /// Resolves the light's projection and view caches if they are dirty.
    pub fn new(spot: &mut SpotLight, parent_world: &Mat4) -> Self {
        let color = spot.color();
        let cache = spot.frustum_cache_mut();

        let view_projection = cache.projection_matrix() * cache.view_matrix() * parent_world.inverse();
        let position = parent_world.transform_point3(cache.position());
        let direction = parent_world.transform_vector3(cache.direction()).normalize_or_zero();
        let cos_outer = (cache.outer_angle() * 0.5).to_radians().cos();
        let cos_inner = (cache.inner_angle() * 0.5).to_radians().cos();

        Self {
            view_projection: view_projection.to_cols_array_2d(),
            position_range: position.extend(cache.range()).to_array(),
            direction_cos_outer: direction.extend(cos_outer).to_array(),
            color_cos_inner: color.extend(cos_inner).to_array(),
        }
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "gpu_data_tests.rs"]
mod tests;
