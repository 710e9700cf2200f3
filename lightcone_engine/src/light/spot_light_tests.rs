use glam::{Quat, Vec3};
use crate::light::{SpotLightConfig, DEFAULT_RANGE};
use super::*;

fn create_test_spot_light() -> SpotLight {
    SpotLight::new(&SpotLightConfig {
        outer_angle: 90.0,
        z_near: 1.0,
        range: 10.0,
        color: Vec3::new(1.0, 0.5, 0.25),
        ..SpotLightConfig::default()
    })
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_spot_light() {
    let spot = SpotLight::default();

    assert_eq!(spot.frustum_cache().outer_angle(), 45.0);
    assert_eq!(spot.frustum_cache().range(), DEFAULT_RANGE);
    assert_eq!(spot.color(), Vec3::ONE);
}

#[test]
fn test_new_uses_config_color() {
    let spot = create_test_spot_light();
    assert_eq!(spot.color(), Vec3::new(1.0, 0.5, 0.25));
}

#[test]
fn test_set_color() {
    let mut spot = SpotLight::default();
    spot.set_color(Vec3::new(0.0, 1.0, 0.0));
    assert_eq!(spot.color(), Vec3::Y);
}

// ============================================================================
// Bounding box
// ============================================================================

#[test]
fn test_bounding_box_covers_cone() {
    let mut spot = create_test_spot_light();
    let aabb = spot.bounding_box();

    // Apex at origin, far face half-width 10 at z = 10
    assert!(aabb.min.z.abs() < 1e-4);
    assert!((aabb.max.z - 10.0).abs() < 1e-3);
    assert!((aabb.max.x - 10.0).abs() < 1e-3);
    assert!((aabb.min.y + 10.0).abs() < 1e-3);
}

#[test]
fn test_bounding_box_ignores_pose() {
    let mut spot = create_test_spot_light();
    let before = spot.bounding_box();

    spot.frustum_cache_mut().set_pose(Vec3::new(4.0, 4.0, 4.0), Quat::from_rotation_x(1.0));

    assert_eq!(spot.bounding_box(), before);
}

#[test]
fn test_range_change_rebuilds_bounding_box() {
    let mut spot = create_test_spot_light();
    spot.bounding_box();

    spot.frustum_cache_mut().set_range(20.0);
    let aabb = spot.bounding_box();

    assert!((aabb.max.z - 20.0).abs() < 1e-2);
}

#[test]
fn test_outer_angle_change_rebuilds_bounding_box() {
    let mut spot = create_test_spot_light();
    let wide = spot.bounding_box();

    spot.frustum_cache_mut().set_outer_angle(30.0);
    let narrow = spot.bounding_box();

    assert!(narrow.max.x < wide.max.x);
}
