/// Debug visualization of spot lights as line and point lists.
///
/// The frustum box and corner points come from the cached frustum vertices.
/// The inner cone is built ad hoc from the inner angle and never touches the
/// cache's dirty state.

use glam::{Mat4, Vec3};
use super::spot_light::SpotLight;

/// Pairs of corner indices forming the 12 edges of a frustum box
/// (near loop, far loop, side edges).
pub const FRUSTUM_BOX_EDGES: [[usize; 2]; 12] = [
    [0, 1], [1, 2], [2, 3], [3, 0],
    [4, 5], [5, 6], [6, 7], [7, 4],
    [0, 4], [1, 5], [2, 6], [3, 7],
];

/// What to draw for a spot light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpotLightDebugOptions {
    pub frustum_box: bool,
    pub corner_points: bool,
    pub inner_cone: bool,
    /// Segments of the inner cone's base circle
    pub inner_cone_segments: u32,
}

impl Default for SpotLightDebugOptions {
    fn default() -> Self {
        Self {
            frustum_box: true,
            corner_points: true,
            inner_cone: true,
            inner_cone_segments: 16,
        }
    }
}

/// World-space debug primitives, ready to be pushed into a line renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugGeometry {
    pub lines: Vec<[Vec3; 2]>,
    pub points: Vec<Vec3>,
}

impl DebugGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the debug primitives of a spot light whose parent has world matrix `parent_world`.
    ///
    /// Frustum vertices are parent-relative, so they are composed with
    /// `parent_world` here.
    pub fn add_spot_light(
        &mut self,
        spot: &mut SpotLight,
        parent_world: &Mat4,
        options: &SpotLightDebugOptions,
    ) {
        let cache = spot.frustum_cache_mut();

        if options.frustum_box || options.corner_points {
            let vertices = cache.frustum_vertices().map(|v| parent_world.transform_point3(v));

            if options.frustum_box {
                self.lines.extend(FRUSTUM_BOX_EDGES.iter().map(|&[a, b]| [vertices[a], vertices[b]]));
            }
            if options.corner_points {
                self.points.extend_from_slice(&vertices);
            }
        }

        if options.inner_cone && options.inner_cone_segments >= 3 {
            let light_to_world = *parent_world
                * Mat4::from_rotation_translation(cache.rotation(), cache.position());
            let range = cache.range();
            let radius = range * (cache.inner_angle() * 0.5).to_radians().tan();
            let apex = light_to_world.transform_point3(Vec3::ZERO);

            let segments = options.inner_cone_segments;
            let rim: Vec<Vec3> = (0..segments)
                .map(|i| {
                    let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
                    let local = Vec3::new(angle.cos() * radius, angle.sin() * radius, range);
                    light_to_world.transform_point3(local)
                })
                .collect();

            for (i, &point) in rim.iter().enumerate() {
                let next = rim[(i + 1) % rim.len()];
                self.lines.push([point, next]);
            }
            // Four generator lines are enough to read the cone
            let step = (rim.len() / 4).max(1);
            for point in rim.iter().step_by(step) {
                self.lines.push([apex, *point]);
            }
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.points.clear();
    }
}

#[cfg(test)]
#[path = "debug_geometry_tests.rs"]
mod tests;
