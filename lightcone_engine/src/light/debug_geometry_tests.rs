use glam::{Mat4, Vec3};
use crate::light::SpotLightConfig;
use super::*;

fn create_test_spot_light() -> SpotLight {
    SpotLight::new(&SpotLightConfig {
        outer_angle: 90.0,
        inner_angle: 60.0,
        z_near: 1.0,
        range: 10.0,
        ..SpotLightConfig::default()
    })
}

#[test]
fn test_default_options_draw_everything() {
    let mut spot = create_test_spot_light();
    let mut geometry = DebugGeometry::new();

    geometry.add_spot_light(&mut spot, &Mat4::IDENTITY, &SpotLightDebugOptions::default());

    // 12 box edges + 16 rim segments + 4 generator lines
    assert_eq!(geometry.lines.len(), 12 + 16 + 4);
    assert_eq!(geometry.points.len(), 8);
}

#[test]
fn test_points_are_frustum_vertices_in_parent_world() {
    let mut spot = create_test_spot_light();
    let parent_world = Mat4::from_translation(Vec3::new(0.0, 100.0, 0.0));
    let options = SpotLightDebugOptions { frustum_box: false, inner_cone: false, ..Default::default() };
    let mut geometry = DebugGeometry::new();

    geometry.add_spot_light(&mut spot, &parent_world, &options);

    let vertices = spot.frustum_cache_mut().frustum_vertices();
    assert!(geometry.lines.is_empty());
    for (point, vertex) in geometry.points.iter().zip(vertices.iter()) {
        assert!((*point - (*vertex + Vec3::new(0.0, 100.0, 0.0))).length() < 1e-4);
    }
}

#[test]
fn test_frustum_box_edges_connect_corners() {
    let mut spot = create_test_spot_light();
    let options = SpotLightDebugOptions { corner_points: false, inner_cone: false, ..Default::default() };
    let mut geometry = DebugGeometry::new();

    geometry.add_spot_light(&mut spot, &Mat4::IDENTITY, &options);

    assert_eq!(geometry.lines.len(), FRUSTUM_BOX_EDGES.len());
    // Side edges run from the near face (z = 1) to the far face (z = 10)
    for [a, b] in &geometry.lines[8..] {
        assert!((a.z - 1.0).abs() < 1e-4);
        assert!((b.z - 10.0).abs() < 1e-3);
    }
}

#[test]
fn test_inner_cone_rim_radius() {
    let mut spot = create_test_spot_light();
    let options = SpotLightDebugOptions { frustum_box: false, corner_points: false, ..Default::default() };
    let mut geometry = DebugGeometry::new();

    geometry.add_spot_light(&mut spot, &Mat4::IDENTITY, &options);

    let expected_radius = 10.0 * 30.0_f32.to_radians().tan();
    for [a, _] in &geometry.lines[..16] {
        assert!((a.z - 10.0).abs() < 1e-4);
        assert!((a.truncate().length() - expected_radius).abs() < 1e-3);
    }
    for [apex, _] in &geometry.lines[16..] {
        assert_eq!(*apex, Vec3::ZERO);
    }
}

#[test]
fn test_inner_cone_does_not_touch_cache() {
    let mut spot = create_test_spot_light();
    spot.frustum_cache_mut().frustum_vertices();
    let before = spot.frustum_cache().recompute_stats();
    let options = SpotLightDebugOptions { frustum_box: false, corner_points: false, ..Default::default() };

    DebugGeometry::new().add_spot_light(&mut spot, &Mat4::IDENTITY, &options);

    assert_eq!(spot.frustum_cache().recompute_stats(), before);
}

#[test]
fn test_clear() {
    let mut spot = create_test_spot_light();
    let mut geometry = DebugGeometry::new();
    geometry.add_spot_light(&mut spot, &Mat4::IDENTITY, &SpotLightDebugOptions::default());

    geometry.clear();

    assert_eq!(geometry, DebugGeometry::default());
}
