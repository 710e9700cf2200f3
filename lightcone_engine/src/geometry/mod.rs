//! Geometry module: bounding boxes and frustum planes.
//!
//! Plain value types shared by the light caches, the light scene, and any
//! renderer that culls against light or camera volumes.

mod aabb;
mod frustum;

pub use aabb::AABB;
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
