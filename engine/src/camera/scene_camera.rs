//! Fixed scene camera
//!
//! The range is viewed head-on from a constant eye position. Only the
//! projection changes, and only when the viewport is resized.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 90.0,
            near: 0.1,
            far: 500.0,
        }
    }
}

/// Camera looking at the scene origin from a constant offset.
#[derive(Debug, Clone)]
pub struct SceneCamera {
    config: CameraConfig,
    view: Mat4,
    projection: Mat4,
    aspect: f32,
}

impl SceneCamera {
    pub fn new(config: CameraConfig, width: u32, height: u32) -> Self {
        let view = Mat4::look_at_rh(config.eye, config.target, config.up);
        let mut camera = Self {
            config,
            view,
            projection: Mat4::IDENTITY,
            aspect: 1.0,
        };
        camera.resize(width, height);
        camera
    }

    /// Recompute the projection for a new viewport size.
    ///
    /// A zero dimension (minimised window) keeps the previous projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
        self.projection = Mat4::perspective_rh(
            self.config.fov_degrees.to_radians(),
            self.aspect,
            self.config.near,
            self.config.far,
        );
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// `projection * view`
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_screen_centre() {
        let camera = SceneCamera::new(CameraConfig::default(), 1280, 720);
        let clip = camera.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn test_zero_size_keeps_projection() {
        let mut camera = SceneCamera::new(CameraConfig::default(), 800, 600);
        let before = camera.projection();
        camera.resize(0, 600);
        assert_eq!(camera.projection(), before);
        assert!((camera.aspect() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn test_ninety_degree_fov_edge() {
        // With a 90 degree vertical FOV the top of the view at distance 3 is y = 3
        let camera = SceneCamera::new(CameraConfig::default(), 1000, 1000);
        let clip = camera.view_projection() * glam::Vec4::new(0.0, 3.0, 0.0, 1.0);
        assert!((clip.y / clip.w - 1.0).abs() < 1e-4);
    }
}
