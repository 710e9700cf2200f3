use glam::{Mat4, Quat, Vec3};
use crate::light::{ProjectivePointLightConfig, MIN_RANGE};
use super::*;

#[test]
fn test_new_projective_point_light() {
    let light = ProjectivePointLight::new(&ProjectivePointLightConfig { range: 4.0, color: Vec3::X });

    assert_eq!(light.range(), 4.0);
    assert_eq!(light.color(), Vec3::X);
    assert_eq!(light.position(), Vec3::ZERO);
    assert_eq!(light.rotation(), Quat::IDENTITY);
}

#[test]
fn test_range_floor() {
    let mut light = ProjectivePointLight::default();
    assert_eq!(light.set_range(0.0), MIN_RANGE);
}

#[test]
fn test_bounding_box_is_range_cube() {
    let mut light = ProjectivePointLight::new(&ProjectivePointLightConfig { range: 2.0, color: Vec3::ONE });
    assert_eq!(light.bounding_box().max, Vec3::splat(2.0));
}

#[test]
fn test_view_matrix_uses_yaw_offset() {
    let mut light = ProjectivePointLight::default();
    light.set_pose(Vec3::new(1.0, 2.0, 3.0), Quat::IDENTITY);

    let view = light.view_matrix();

    // One unit along the light's +Z lands on view -Z
    let p = view.transform_point3(Vec3::new(1.0, 2.0, 4.0));
    assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
}

#[test]
fn test_view_matrix_tracks_pose() {
    let mut light = ProjectivePointLight::default();
    let before = light.view_matrix();

    light.set_pose(Vec3::ZERO, Quat::from_rotation_y(0.5));
    let after = light.view_matrix();

    assert_ne!(before, after);
    let expected = Mat4::from_quat(Quat::from_rotation_y(0.5) * VIEW_ROTATION_OFFSET).inverse();
    assert!(after.abs_diff_eq(expected, 1e-5));
}
