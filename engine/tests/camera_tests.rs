//! Camera Tests - View, Projection and Resize
//!
//! Tests for the fixed scene camera.

use cannon_range_engine::camera::{CameraConfig, SceneCamera};
use glam::{Mat4, Vec3};

// ============================================================================
// SceneCamera Tests
// ============================================================================

#[test]
fn test_default_config() {
    let config = CameraConfig::default();

    assert_eq!(config.eye, Vec3::new(0.0, 0.0, 3.0));
    assert_eq!(config.target, Vec3::ZERO);
    assert_eq!(config.up, Vec3::Y);
    assert_eq!(config.fov_degrees, 90.0);
    assert_eq!(config.near, 0.1);
    assert_eq!(config.far, 500.0);
}

#[test]
fn test_view_is_fixed_look_at() {
    let camera = SceneCamera::new(CameraConfig::default(), 800, 600);
    let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::Y);
    assert_eq!(camera.view(), expected);
}

#[test]
fn test_resize_updates_aspect() {
    let mut camera = SceneCamera::new(CameraConfig::default(), 800, 800);
    assert_eq!(camera.aspect(), 1.0);

    camera.resize(1600, 800);
    assert_eq!(camera.aspect(), 2.0);
    let expected = Mat4::perspective_rh(90f32.to_radians(), 2.0, 0.1, 500.0);
    assert_eq!(camera.projection(), expected);
}

#[test]
fn test_zero_size_keeps_projection() {
    let mut camera = SceneCamera::new(CameraConfig::default(), 1280, 720);
    let before = camera.projection();

    camera.resize(0, 720);
    camera.resize(1280, 0);

    assert_eq!(camera.projection(), before);
}

#[test]
fn test_ninety_degree_fov_edges() {
    // At distance 3 a 90 degree vertical FOV spans y in [-3, 3]
    let camera = SceneCamera::new(CameraConfig::default(), 1000, 1000);
    let top = camera.view_projection().project_point3(Vec3::new(0.0, 3.0, 0.0));
    assert!((top.y - 1.0).abs() < 1e-5);
}
