/// LightFrustumCache: lazily recomputed projection, view, frustum and
/// frustum corners of a cone light.
///
/// Setters only store the new value and mark the affected derived values
/// dirty. Getters recompute a dirty value once, clear its bit, and return
/// the cached copy until the next affecting setter:
///
/// | setter                               | projection | view | frustum | vertices |
/// |--------------------------------------|:----------:|:----:|:-------:|:--------:|
/// | outer angle, z near, aspect, range   |     x      |      |    x    |    x     |
/// | position / rotation                  |            |  x   |    x    |    x     |
/// | inner angle                          |            |      |         |          |
///
/// Nothing here fails. The only validation is two silent clamps:
/// `inner_angle <= outer_angle` and `range >= MIN_RANGE`. Other degenerate
/// input (non-positive angles, near beyond far) produces a degenerate matrix.

use glam::{Mat4, Quat, Vec3};
use crate::geometry::Frustum;
use super::config::{
    SpotLightConfig, MIN_RANGE, DEFAULT_RANGE, DEFAULT_OUTER_ANGLE,
    DEFAULT_INNER_ANGLE, DEFAULT_Z_NEAR, DEFAULT_ASPECT,
};
use super::dirty::LightDirty;

const SOURCE: &str = "lightcone::LightFrustumCache";

/// 180° yaw applied on top of the light's rotation.
///
/// Scene nodes face +Z while the projection looks down -Z.
pub const VIEW_ROTATION_OFFSET: Quat = Quat::from_xyzw(0.0, 1.0, 0.0, 0.0);

/// Corners of the clip cube, near face first.
///
/// Each face is wound (-,-) (+,-) (+,+) (-,+), so corner `i` and `i + 4`
/// lie on the same side edge.
pub const CLIP_CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new( 1.0, -1.0, -1.0),
    Vec3::new( 1.0,  1.0, -1.0),
    Vec3::new(-1.0,  1.0, -1.0),
    Vec3::new(-1.0, -1.0,  1.0),
    Vec3::new( 1.0, -1.0,  1.0),
    Vec3::new( 1.0,  1.0,  1.0),
    Vec3::new(-1.0,  1.0,  1.0),
];

/// How many times each derived value has been recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeStats {
    pub projection_matrix: u64,
    pub view_matrix: u64,
    pub frustum: u64,
    pub frustum_vertices: u64,
}

/// Cached cone-light geometry.
///
/// Position and rotation are a snapshot of the owning node's transform,
/// relative to its parent. Everything derived from them (view matrix,
/// frustum, vertices) is therefore in parent space.
#[derive(Debug, Clone)]
pub struct LightFrustumCache {
    // Inputs
    position: Vec3,
    rotation: Quat,
    outer_angle: f32,
    inner_angle: f32,
    z_near: f32,
    aspect: f32,
    range: f32,
    no_cone: bool,

    // Derived
    dirty: LightDirty,
    projection_matrix: Mat4,
    view_matrix: Mat4,
    frustum: Frustum,
    frustum_vertices: [Vec3; 8],

    stats: RecomputeStats,
}

impl Default for LightFrustumCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LightFrustumCache {
    /// Create a cache with the default cone (45°/35°, near 0.1, aspect 1, range 1)
    /// at the parent origin. Every derived value starts dirty.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            outer_angle: DEFAULT_OUTER_ANGLE,
            inner_angle: DEFAULT_INNER_ANGLE,
            z_near: DEFAULT_Z_NEAR,
            aspect: DEFAULT_ASPECT,
            range: DEFAULT_RANGE,
            no_cone: false,
            dirty: LightDirty::all(),
            projection_matrix: Mat4::IDENTITY,
            view_matrix: Mat4::IDENTITY,
            frustum: Frustum::default(),
            frustum_vertices: CLIP_CUBE_CORNERS,
            stats: RecomputeStats::default(),
        }
    }

    /// Create a cache from a config, applying the usual clamps.
    ///
    /// The aspect is stored as given even in cone mode, so a later
    /// `set_no_cone(true)` projects with it.
    pub fn from_config(config: &SpotLightConfig) -> Self {
        let mut cache = Self::new();
        cache.set_no_cone(config.no_cone);
        cache.set_outer_angle(config.outer_angle);
        cache.set_inner_angle(config.inner_angle);
        cache.set_z_near(config.z_near);
        // Every derived value is still dirty; skip the runtime aspect guard
        cache.aspect = config.aspect;
        cache.set_range(config.range);
        cache
    }

    // ===== INPUT GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Full cone angle in degrees.
    pub fn outer_angle(&self) -> f32 {
        self.outer_angle
    }

    /// Inner cone angle in degrees. Never greater than `outer_angle()`.
    pub fn inner_angle(&self) -> f32 {
        self.inner_angle
    }

    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    /// Whether the projection uses `aspect()` instead of a 1:1 cone.
    pub fn no_cone(&self) -> bool {
        self.no_cone
    }

    /// Aspect ratio the projection is actually built with.
    pub fn effective_aspect(&self) -> f32 {
        if self.no_cone { self.aspect } else { 1.0 }
    }

    pub fn recompute_stats(&self) -> RecomputeStats {
        self.stats
    }

    // ===== SETTERS: store and mark dirty, compute nothing =====

    /// Set the full cone angle in degrees. Returns the stored value.
    ///
    /// The inner angle follows it down if it would otherwise exceed it.
    pub fn set_outer_angle(&mut self, degrees: f32) -> f32 {
        if self.outer_angle != degrees {
            self.outer_angle = degrees;
            self.dirty |= LightDirty::SHAPE | LightDirty::BOUNDING_BOX;

            if self.inner_angle > self.outer_angle {
                crate::engine_debug!(SOURCE, "inner angle {} clamped to new outer angle {}",
                    self.inner_angle, self.outer_angle);
                self.inner_angle = self.outer_angle;
            }
        }
        self.outer_angle
    }

    /// Set the inner cone angle in degrees, clamped to the outer angle.
    /// Returns the stored value.
    ///
    /// The inner cone does not take part in the projection, so nothing is dirtied.
    pub fn set_inner_angle(&mut self, degrees: f32) -> f32 {
        if degrees > self.outer_angle {
            crate::engine_debug!(SOURCE, "inner angle {} clamped to outer angle {}",
                degrees, self.outer_angle);
        }
        self.inner_angle = degrees.min(self.outer_angle);
        self.inner_angle
    }

    /// Set the near clip distance. Returns the stored value.
    pub fn set_z_near(&mut self, distance: f32) -> f32 {
        if self.z_near != distance {
            self.z_near = distance;
            self.dirty |= LightDirty::SHAPE | LightDirty::BOUNDING_BOX;
        }
        self.z_near
    }

    /// Set the aspect ratio. Returns the stored value.
    ///
    /// Ignored unless it can affect the projection: in no-cone mode the ratio
    /// must differ from the current one; in cone mode the current ratio must
    /// differ from the neutral 1.0.
    pub fn set_aspect(&mut self, ratio: f32) -> f32 {
        if (self.no_cone && ratio != self.aspect) || (!self.no_cone && self.aspect != 1.0) {
            self.aspect = ratio;
            self.dirty |= LightDirty::SHAPE | LightDirty::BOUNDING_BOX;
        }
        self.aspect
    }

    /// Set the range (far clip distance), clamped up to `MIN_RANGE`.
    /// Returns the stored value.
    pub fn set_range(&mut self, distance: f32) -> f32 {
        let range = if distance < MIN_RANGE {
            crate::engine_debug!(SOURCE, "range {} clamped to minimum {}", distance, MIN_RANGE);
            MIN_RANGE
        } else {
            distance
        };

        if self.range != range {
            self.range = range;
            self.dirty |= LightDirty::SHAPE | LightDirty::BOUNDING_BOX;
        }
        self.range
    }

    /// Switch between a 1:1 cone and an `aspect()`-shaped projection.
    pub fn set_no_cone(&mut self, no_cone: bool) {
        if self.no_cone != no_cone {
            self.no_cone = no_cone;
            if self.aspect != 1.0 {
                self.dirty |= LightDirty::SHAPE | LightDirty::BOUNDING_BOX;
            }
        }
    }

    /// Store a new parent-space pose; marks the pose-dependent values dirty if it changed.
    ///
    /// Only the owning scene node writes the pose, so its copy and this
    /// snapshot never disagree.
    pub(crate) fn set_pose(&mut self, position: Vec3, rotation: Quat) {
        if self.position != position || self.rotation != rotation {
            self.position = position;
            self.rotation = rotation;
            self.on_position_or_rotation_changed();
        }
    }

    /// Called by the owner whenever its transform changed.
    ///
    /// Marks view matrix, frustum and vertices dirty. The projection only
    /// depends on the cone shape and stays cached.
    pub fn on_position_or_rotation_changed(&mut self) {
        self.dirty |= LightDirty::POSE;
    }

    // ===== DERIVED GETTERS: recompute if dirty =====

    /// Symmetric perspective projection (OpenGL clip depth).
    pub fn projection_matrix(&mut self) -> Mat4 {
        if self.dirty.take(LightDirty::PROJECTION_MATRIX) {
            self.projection_matrix = Mat4::perspective_rh_gl(
                self.outer_angle.to_radians(),
                self.effective_aspect(),
                self.z_near,
                self.range,
            );
            self.stats.projection_matrix += 1;
            crate::engine_trace!(SOURCE, "projection recomputed (fov {}°, aspect {}, near {}, far {})",
                self.outer_angle, self.effective_aspect(), self.z_near, self.range);
        }
        self.projection_matrix
    }

    /// Parent space to light view space.
    pub fn view_matrix(&mut self) -> Mat4 {
        if self.dirty.take(LightDirty::VIEW_MATRIX) {
            self.view_matrix = self.light_to_parent().inverse();
            self.stats.view_matrix += 1;
            crate::engine_trace!(SOURCE, "view matrix recomputed");
        }
        self.view_matrix
    }

    /// Frustum planes of `projection * view`, in parent space.
    ///
    /// Resolves the projection and view caches first if they are dirty.
    pub fn frustum(&mut self) -> Frustum {
        if self.dirty.take(LightDirty::FRUSTUM) {
            let view_projection = self.projection_matrix() * self.view_matrix();
            self.frustum = Frustum::from_view_projection(&view_projection);
            self.stats.frustum += 1;
            crate::engine_trace!(SOURCE, "frustum recomputed");
        }
        self.frustum
    }

    /// The 8 frustum corners in parent space, near face first
    /// (same order as `CLIP_CUBE_CORNERS`).
    ///
    /// Callers needing world space must still apply the parent's world matrix.
    pub fn frustum_vertices(&mut self) -> [Vec3; 8] {
        if self.dirty.take(LightDirty::FRUSTUM_VERTICES) {
            let unproject = self.light_to_parent() * self.projection_matrix().inverse();
            for (vertex, corner) in self.frustum_vertices.iter_mut().zip(CLIP_CUBE_CORNERS) {
                *vertex = unproject.project_point3(corner);
            }
            self.stats.frustum_vertices += 1;
            crate::engine_trace!(SOURCE, "frustum vertices recomputed");
        }
        self.frustum_vertices
    }

    /// Frustum corners in the light's own space (pose not applied). Not cached.
    pub fn local_frustum_vertices(&mut self) -> [Vec3; 8] {
        let unproject = Mat4::from_quat(VIEW_ROTATION_OFFSET) * self.projection_matrix().inverse();
        CLIP_CUBE_CORNERS.map(|corner| unproject.project_point3(corner))
    }

    /// Direction the light shines along (+Z of its rotation), in parent space.
    pub fn direction(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    // ===== OWNER HOOKS =====

    /// Clear and report the owner's bounding-box dirty bit.
    pub(crate) fn take_bounding_box_dirty(&mut self) -> bool {
        self.dirty.take(LightDirty::BOUNDING_BOX)
    }

    fn light_to_parent(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation * VIEW_ROTATION_OFFSET, self.position)
    }
}

#[cfg(test)]
#[path = "frustum_cache_tests.rs"]
mod tests;
