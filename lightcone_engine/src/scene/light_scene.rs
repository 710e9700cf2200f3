/// LightScene: a collection of lights placed under parent containers.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Each node owns
/// its light's authoritative pose (relative to the parent) and the parent's
/// world matrix. Pose changes are pushed into the light synchronously, so
/// the light's caches never observe a stale transform. Light pose setters
/// are crate-private: the node is the only writer.

use glam::{Mat4, Quat, Vec3};
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use crate::error::{Error, Result};
use crate::geometry::{Frustum, AABB};
use crate::light::{
    DebugGeometry, Light, LightKind, SpotLightDebugOptions, SpotLightGpuData,
};
use crate::{engine_bail, engine_debug, engine_err};

const SOURCE: &str = "lightcone::LightScene";

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a light within a LightScene.
    ///
    /// Keys remain valid even after other lights are removed.
    /// A key becomes invalid only when its own light is removed.
    pub struct LightKey;
}

// ===== LIGHT NODE =====

/// A light plus its placement.
#[derive(Debug, Clone)]
pub struct LightNode {
    light: Light,
    /// Position relative to the parent container
    position: Vec3,
    /// Rotation relative to the parent container
    rotation: Quat,
    /// World matrix of the parent container
    parent_world: Mat4,
}

impl LightNode {
    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn parent_world(&self) -> &Mat4 {
        &self.parent_world
    }

    /// Light space to world space.
    pub fn world_matrix(&self) -> Mat4 {
        self.parent_world * Mat4::from_rotation_translation(self.rotation, self.position)
    }
}

// ===== LIGHT SCENE =====

#[derive(Debug, Default)]
pub struct LightScene {
    lights: SlotMap<LightKey, LightNode>,
    /// Lights whose world bounds may have changed since last take_dirty_lights()
    dirty_lights: FxHashSet<LightKey>,
}

fn check_pose(position: Vec3, rotation: Quat) -> Result<()> {
    if !position.is_finite() {
        engine_bail!(Error::InvalidParameter, SOURCE, "position {:?} is not finite", position);
    }
    if !rotation.is_finite() {
        engine_bail!(Error::InvalidParameter, SOURCE, "rotation {:?} is not finite", rotation);
    }
    Ok(())
}

impl LightScene {
    pub fn new() -> Self {
        Self {
            lights: SlotMap::with_key(),
            dirty_lights: FxHashSet::default(),
        }
    }

    // ===== LIFECYCLE =====

    /// Add a light at `position`/`rotation` relative to a parent at the world origin.
    pub fn insert_light(
        &mut self,
        light: impl Into<Light>,
        position: Vec3,
        rotation: Quat,
    ) -> Result<LightKey> {
        check_pose(position, rotation)?;

        let mut light = light.into();
        light.set_pose(position, rotation);
        let kind = light.kind();

        let key = self.lights.insert(LightNode {
            light,
            position,
            rotation,
            parent_world: Mat4::IDENTITY,
        });
        self.dirty_lights.insert(key);

        engine_debug!(SOURCE, "inserted {:?} light {:?}", kind, key);
        Ok(key)
    }

    /// Remove a light, returning it.
    pub fn remove_light(&mut self, key: LightKey) -> Result<Light> {
        let node = self.lights.remove(key)
            .ok_or_else(|| engine_err!(Error::InvalidLight, SOURCE, "cannot remove unknown light {:?}", key))?;
        self.dirty_lights.remove(&key);

        engine_debug!(SOURCE, "removed {:?} light {:?}", node.light.kind(), key);
        Ok(node.light)
    }

    // ===== ACCESS =====

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Iterate over all light keys.
    pub fn light_keys(&self) -> impl Iterator<Item = LightKey> + '_ {
        self.lights.keys()
    }

    pub fn node(&self, key: LightKey) -> Option<&LightNode> {
        self.lights.get(key)
    }

    pub fn light(&self, key: LightKey) -> Option<&Light> {
        self.lights.get(key).map(|node| &node.light)
    }

    /// Mutable access to a light's parameters.
    ///
    /// The light is flagged dirty since range or cone changes move its bounds.
    pub fn light_mut(&mut self, key: LightKey) -> Option<&mut Light> {
        let node = self.lights.get_mut(key)?;
        self.dirty_lights.insert(key);
        Some(&mut node.light)
    }

    fn node_mut(&mut self, key: LightKey) -> Result<&mut LightNode> {
        self.lights.get_mut(key)
            .ok_or_else(|| engine_err!(Error::InvalidLight, SOURCE, "unknown light {:?}", key))
    }

    // ===== TRANSFORMS =====

    /// Set the pose relative to the parent and notify the light.
    pub fn set_pose(&mut self, key: LightKey, position: Vec3, rotation: Quat) -> Result<()> {
        check_pose(position, rotation)?;

        let node = self.node_mut(key)?;
        node.position = position;
        node.rotation = rotation;
        node.light.set_pose(position, rotation);
        self.dirty_lights.insert(key);
        Ok(())
    }

    pub fn set_position(&mut self, key: LightKey, position: Vec3) -> Result<()> {
        let rotation = self.node_mut(key)?.rotation;
        self.set_pose(key, position, rotation)
    }

    pub fn set_rotation(&mut self, key: LightKey, rotation: Quat) -> Result<()> {
        let position = self.node_mut(key)?.position;
        self.set_pose(key, position, rotation)
    }

    /// Set the world matrix of the light's parent container.
    ///
    /// Rejects non-finite and singular matrices. Parent-relative light data
    /// (view matrix, frustum, vertices) is untouched; only the world bounds change.
    pub fn set_parent_world(&mut self, key: LightKey, parent_world: Mat4) -> Result<()> {
        if !parent_world.is_finite() {
            engine_bail!(Error::InvalidParameter, SOURCE, "parent world matrix of {:?} is not finite", key);
        }
        // GPU records need the inverse
        if parent_world.determinant() == 0.0 {
            engine_bail!(Error::InvalidParameter, SOURCE, "parent world matrix of {:?} is singular", key);
        }
        self.node_mut(key)?.parent_world = parent_world;
        self.dirty_lights.insert(key);
        Ok(())
    }

    /// Get the set of lights with pending bound changes.
    pub fn dirty_lights(&self) -> &FxHashSet<LightKey> {
        &self.dirty_lights
    }

    /// Take and clear the dirty light set.
    pub fn take_dirty_lights(&mut self) -> FxHashSet<LightKey> {
        std::mem::take(&mut self.dirty_lights)
    }

    // ===== DERIVED DATA =====

    /// Light bounds in world space.
    pub fn world_bounding_box(&mut self, key: LightKey) -> Result<AABB> {
        let node = self.node_mut(key)?;
        let world = node.world_matrix();
        Ok(node.light.bounding_box().transformed(&world))
    }

    /// Spot light frustum corners in world space.
    ///
    /// The light caches them parent-relative; the parent world matrix is applied here.
    pub fn frustum_vertices_world(&mut self, key: LightKey) -> Result<[Vec3; 8]> {
        let node = self.node_mut(key)?;
        let parent_world = node.parent_world;
        let kind = node.light.kind();

        let spot = node.light.as_spot_mut()
            .ok_or_else(|| engine_err!(Error::LightKindMismatch, SOURCE,
                "light {:?} is a {:?} light and has no frustum", key, kind))?;

        Ok(spot.frustum_cache_mut()
            .frustum_vertices()
            .map(|v| parent_world.transform_point3(v)))
    }

    /// GPU record of a spot light.
    pub fn spot_light_gpu_data(&mut self, key: LightKey) -> Result<SpotLightGpuData> {
        let node = self.node_mut(key)?;
        let parent_world = node.parent_world;

        match &mut node.light {
            Light::Spot(spot) => Ok(SpotLightGpuData::new(spot, &parent_world)),
            other => Err(engine_err!(Error::LightKindMismatch, SOURCE,
                "light {:?} is a {:?} light, expected {:?}", key, other.kind(), LightKind::Spot)),
        }
    }

    /// Debug primitives of every spot light in the scene.
    pub fn debug_geometry(&mut self, options: &SpotLightDebugOptions) -> DebugGeometry {
        let mut geometry = DebugGeometry::new();
        for node in self.lights.values_mut() {
            if let Light::Spot(spot) = &mut node.light {
                geometry.add_spot_light(spot, &node.parent_world, options);
            }
        }
        geometry
    }

    /// Keys of the lights whose world bounds touch `frustum`.
    pub fn cull_lights(&mut self, frustum: &Frustum) -> Vec<LightKey> {
        self.lights.iter_mut()
            .filter_map(|(key, node)| {
                let world = node.world_matrix();
                let world_aabb = node.light.bounding_box().transformed(&world);
                frustum.intersects_aabb(&world_aabb).then_some(key)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "light_scene_tests.rs"]
mod tests;
